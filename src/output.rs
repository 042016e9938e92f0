//! Persistent result log.
//!
//! Found keys are appended to a plain-text log so an interrupted
//! terminal session never loses a result.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use chrono::Local;

use crate::crypto::NetworkProfile;
use crate::matcher::MatchPosition;
use crate::reporter::format_number;
use crate::worker::VanityResult;

/// One record of a successful search, ready to be appended to the log.
#[derive(Debug)]
pub struct FoundRecord<'a> {
    pub result: &'a VanityResult,
    pub profile: NetworkProfile,
    pub pattern: &'a str,
    pub position: MatchPosition,
    pub case_sensitive: bool,
    pub keys_tested: u64,
}

/// Appends a timestamped record to the result log, creating the file on
/// first use.
pub fn append_record(path: &Path, record: &FoundRecord<'_>) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;

    writeln!(file, "[{}]", Local::now().format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(file, "Type: {}", record.profile.label())?;
    writeln!(file, "Address: {}", record.result.address)?;
    writeln!(file, "Private key (hex): {}", record.result.private_key)?;
    writeln!(file, "Pattern: {}", record.pattern)?;
    writeln!(file, "Position: {}", record.position)?;
    writeln!(
        file,
        "Case-sensitive: {}",
        if record.case_sensitive { "Yes" } else { "No" }
    )?;
    writeln!(file, "Keys tested: {}", format_number(record.keys_tested))?;
    writeln!(file)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn sample_result() -> VanityResult {
        VanityResult {
            private_key: "00".repeat(32),
            address: "t1KRqwQhktLV4BjbNLiuH6pb3AMoszZKcQB".into(),
            worker_id: 0,
        }
    }

    #[test]
    fn test_append_record_creates_and_appends() {
        let dir = std::env::temp_dir().join("flux_vanity_output_test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("found_addresses.txt");
        let _ = fs::remove_file(&path);

        let result = sample_result();
        let record = FoundRecord {
            result: &result,
            profile: NetworkProfile::Zelcore,
            pattern: "KRqw",
            position: MatchPosition::Anchored,
            case_sensitive: false,
            keys_tested: 123_456,
        };

        append_record(&path, &record).unwrap();
        append_record(&path, &record).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.matches("Type: Zelcore (t1)").count(), 2);
        assert!(contents.contains("Address: t1KRqwQhktLV4BjbNLiuH6pb3AMoszZKcQB"));
        assert!(contents.contains("Pattern: KRqw"));
        assert!(contents.contains("Position: anchored"));
        assert!(contents.contains("Case-sensitive: No"));
        assert!(contents.contains("Keys tested: 123,456"));

        let _ = fs::remove_file(&path);
    }
}
