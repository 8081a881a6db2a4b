#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rpo() -> Command {
    let mut cmd = cargo_bin_cmd!("rponto");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rponto.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write an extracted-text document into the temp dir and return its path
pub fn write_doc(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rponto_doc.txt", name));
    fs::write(&path, content).expect("write test document");
    path.to_string_lossy().to_string()
}

/// A path that is guaranteed not to exist
pub fn missing_doc(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rponto_missing.txt", name));
    fs::remove_file(&path).ok();
    path.to_string_lossy().to_string()
}

pub const NORMAL_DAY: &str = "02/05/2025 - Sex 08:00:00 12:00:00 13:00:00 17:00:00 08:00:00";
pub const HOLIDAY_6H: &str = "01/05/2025 - Qui Feriado Feriado Feriado Feriado 06:00:00";

/// The May 2025 report of MARIA SILVA: one normal day, one 6h holiday, signed.
pub fn maria_doc() -> String {
    format!(
        "Espelho de Ponto\n\
         MARIA SILVA - Período: 01/05/2025 à 31/05/2025\n\
         Data Dia Ent1 Sai1 Ent2 Sai2 C.PRE\n\
         {HOLIDAY_6H}\n\
         {NORMAL_DAY}\n\
         03/05/2025 - Sáb\n\
         documento assinado digitalmente\n"
    )
}

/// Same layout, unsigned, one hour short on the only day.
pub fn joao_doc() -> String {
    "JOÃO PEREIRA - Período: 1/6/25 à 30/6/25\n\
     02/06/2025 - Seg 08:00:00 12:00:00 13:00:00 16:00:00 08:00:00\n"
        .to_string()
}
