use serde::Serialize;

#[derive(Serialize)]
pub struct Health { pub ok: bool, pub service: &'static str }
