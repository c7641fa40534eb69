use serde::Deserialize;
use serde::Serialize;

// Absent and null fields both deserialize to None and are treated as "".

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RegisterPlayer {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StartGame {
    #[serde(default)]
    pub player1: Option<String>,
    #[serde(default)]
    pub player2: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PlayRound {
    #[serde(default)]
    pub p1_choice: Option<String>,
    #[serde(default)]
    pub p2_choice: Option<String>,
}
