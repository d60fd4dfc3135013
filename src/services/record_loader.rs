use std::fs;
use std::io::Read;
use serde_json::Value;
use crate::enums::record_source::RecordSource;
use crate::errors::{WebhookError, WebhookResult};
use crate::structs::config::config::Config;
use crate::structs::contact_record::ContactRecord;

pub struct RecordLoader;

impl RecordLoader {
    pub fn load(source: &RecordSource, config: &Config) -> WebhookResult<ContactRecord> {
        log::debug!("Loading contact record from {source}");

        match source {
            RecordSource::File(path) => {
                let content = fs::read_to_string(path)
                    .map_err(|e| WebhookError::record_error(&source.to_string(), &e.to_string()))?;
                Self::from_json_str(&content, &source.to_string())
            }
            RecordSource::Stdin => Self::from_reader(std::io::stdin().lock(), &source.to_string()),
            RecordSource::Config => config
                .record
                .clone()
                .map(Self::from_toml_table)
                .ok_or_else(|| WebhookError::record_error(&source.to_string(), "no record supplied"))?,
        }
    }

    /// Converts the `[record]` table value by value. TOML datetimes have no
    /// JSON counterpart and are forwarded as the text they were written as.
    pub fn from_toml_table(table: toml::Table) -> WebhookResult<ContactRecord> {
        let object = table
            .into_iter()
            .map(|(key, value)| (key, toml_to_json(value)))
            .collect::<serde_json::Map<_, _>>();

        Ok(serde_json::from_value(Value::Object(object))?)
    }

    pub fn from_reader<R: Read>(mut reader: R, source_name: &str) -> WebhookResult<ContactRecord> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .map_err(|e| WebhookError::record_error(source_name, &e.to_string()))?;
        Self::from_json_str(&content, source_name)
    }

    /// Neither presence nor type of a field is checked.
    pub fn from_json_str(content: &str, source_name: &str) -> WebhookResult<ContactRecord> {
        let value: Value = serde_json::from_str(content)?;
        if !value.is_object() {
            return Err(WebhookError::record_error(source_name, "expected a JSON object"));
        }

        Ok(serde_json::from_value(value)?)
    }
}

fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(n) => Value::from(n),
        toml::Value::Float(f) => serde_json::Number::from_f64(f).map_or(Value::Null, Value::Number),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table.into_iter().map(|(key, value)| (key, toml_to_json(value))).collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use serde_json::json;

    #[test]
    fn reads_record_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"FullName": "Jane Doe", "HR_ID": 42, "NeedsSync": false}}"#).unwrap();

        let record = RecordLoader::load(&RecordSource::File(file.path().to_path_buf()), &Config::default()).unwrap();

        assert_eq!(record.full_name, Some(json!("Jane Doe")));
        assert_eq!(record.hr_id, Some(json!(42)));
        assert_eq!(record.needs_sync, Some(json!(false)));
        assert_eq!(record.email, None);
    }

    #[test]
    fn missing_file_is_a_record_error() {
        let source = RecordSource::File("/nonexistent/contact.json".into());
        let error = RecordLoader::load(&source, &Config::default()).unwrap_err();

        assert!(matches!(error, WebhookError::RecordSourceError { .. }));
    }

    #[test]
    fn falls_back_to_config_record() {
        let config: Config = toml::from_str("[record]\nCity = \"Paris\"\n").unwrap();

        let record = RecordLoader::load(&RecordSource::Config, &config).unwrap();
        assert_eq!(record.city, Some(json!("Paris")));

        let error = RecordLoader::load(&RecordSource::Config, &Config::default()).unwrap_err();
        assert!(matches!(error, WebhookError::RecordSourceError { .. }));
    }

    #[test]
    fn reads_from_any_reader() {
        let input = br#"{"Email": "jane@x.com"}"#;
        let record = RecordLoader::from_reader(&input[..], "standard input").unwrap();

        assert_eq!(record.email, Some(json!("jane@x.com")));
    }

    #[test]
    fn rejects_non_object_json() {
        let error = RecordLoader::from_json_str("[1, 2, 3]", "standard input").unwrap_err();
        assert!(matches!(error, WebhookError::RecordSourceError { .. }));
    }

    #[test]
    fn values_of_unexpected_types_are_forwarded_verbatim() {
        let cases = [
            (r#"{"LastSynced": 1704067200000}"#, "LastSynced", json!(1_704_067_200_000_u64)),
            (r#"{"NeedsSync": "true"}"#, "NeedsSync", json!("true")),
            (r#"{"HR_ID": 4.5}"#, "HR_ID", json!(4.5)),
            (r#"{"HR_ID": 18446744073709551615}"#, "HR_ID", json!(u64::MAX)),
            (r#"{"Mobile": 33000000}"#, "Mobile", json!(33_000_000)),
        ];

        for (input, key, expected) in cases {
            let record = RecordLoader::from_json_str(input, "standard input").unwrap();
            let fields = serde_json::to_value(&record).unwrap();

            assert_eq!(fields[key], expected, "{input}");
        }
    }

    #[test]
    fn toml_datetimes_become_their_text() {
        let config: Config = toml::from_str(
            "[record]\nLastSynced = 2024-01-01T00:00:00Z\nHR_ID = 42\nNeedsSync = \"yes\"\n",
        )
        .unwrap();

        let record = RecordLoader::load(&RecordSource::Config, &config).unwrap();

        assert_eq!(record.last_synced, Some(json!("2024-01-01T00:00:00Z")));
        assert_eq!(record.hr_id, Some(json!(42)));
        assert_eq!(record.needs_sync, Some(json!("yes")));
    }
}
