use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;

use hbs_gettext_core::Catalog;
use serde::Serialize;

use crate::error::CliError;

pub fn write_catalogs(path: &Path, catalogs: &BTreeMap<String, Catalog>) -> Result<(), CliError> {
    write_json(path, catalogs)
}

pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), CliError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    serde_json::to_writer_pretty(&mut file, value)?;
    writeln!(file)?;
    Ok(())
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, value)?;
    writeln!(handle)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::write_catalogs;
    use hbs_gettext_core::Catalog;
    use serde_json::Value;
    use std::collections::BTreeMap;
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn writes_catalogs_as_json() {
        let mut path = std::env::temp_dir();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        path.push(format!("hbs_gettext_artifacts_{nanos}"));
        let out = path.join("messages.json");

        let mut catalog = Catalog::new();
        catalog.entry("Hello", None).line.push(3);
        let mut catalogs = BTreeMap::new();
        catalogs.insert("views/index.hbs".to_string(), catalog);

        write_catalogs(&out, &catalogs).expect("write");
        let contents = fs::read_to_string(&out).expect("read");
        let value: Value = serde_json::from_str(&contents).expect("json");
        assert_eq!(value["views/index.hbs"]["Hello"]["msgid"], Value::from("Hello"));
        assert_eq!(value["views/index.hbs"]["Hello"]["line"], serde_json::json!([3]));

        fs::remove_dir_all(&path).ok();
    }
}
