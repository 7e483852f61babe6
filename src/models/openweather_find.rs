use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct FindEntry {
    pub name: String,
}

#[derive(Deserialize, Debug)]
pub struct FindResponse {
    pub list: Vec<FindEntry>,
}

#[derive(Deserialize, Debug)]
pub struct PlaceLookup {
    pub name: String,
}
