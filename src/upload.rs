//! Client-side size gate for order attachments.

use web_sys::{File, HtmlInputElement};

use crate::alerts::AlertSink;

pub trait UploadFile {
    fn file_name(&self) -> String;
    fn byte_size(&self) -> u64;
}

impl UploadFile for File {
    fn file_name(&self) -> String {
        self.name()
    }

    fn byte_size(&self) -> u64 {
        self.size() as u64
    }
}

/// Keep files no larger than `max_bytes`, in their original order. Each
/// rejected file gets its own alert.
pub fn accept_files<F, I, A>(files: I, max_bytes: u64, alerts: &A) -> Vec<F>
where
    F: UploadFile,
    I: IntoIterator<Item = F>,
    A: AlertSink + ?Sized,
{
    files
        .into_iter()
        .filter(|file| {
            if file.byte_size() > max_bytes {
                let name = file.file_name();
                tracing::warn!(file = %name, size = file.byte_size(), max_bytes, "upload rejected");
                alerts.alert(&too_large_message(&name, max_bytes));
                false
            } else {
                true
            }
        })
        .collect()
}

/// Files currently selected in a file `<input>`, filtered by size.
pub fn handle_file_upload<A: AlertSink + ?Sized>(input: &HtmlInputElement, max_bytes: u64, alerts: &A) -> Vec<File> {
    let selected: Vec<File> = match input.files() {
        Some(list) => (0..list.length()).filter_map(|i| list.get(i)).collect(),
        None => Vec::new(),
    };
    accept_files(selected, max_bytes, alerts)
}

pub fn too_large_message(name: &str, max_bytes: u64) -> String {
    format!("File {} is too large. Maximum size is {}.", name, format_limit(max_bytes))
}

/// `16777216` -> `16MB`, `1572864` -> `1.5MB`, `500` -> `500 bytes`.
fn format_limit(bytes: u64) -> String {
    const MIB: u64 = 1024 * 1024;
    if bytes < MIB {
        return format!("{} bytes", bytes);
    }
    let mb = bytes as f64 / MIB as f64;
    let rounded = (mb * 10.0).round() / 10.0;
    format!("{}MB", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::recording::RecordingAlerts;
    use crate::constants::MAX_UPLOAD_BYTES;

    const MB: u64 = 1024 * 1024;

    #[derive(Debug, Clone, PartialEq)]
    struct Picked {
        name: &'static str,
        size: u64,
    }

    impl UploadFile for Picked {
        fn file_name(&self) -> String {
            self.name.to_string()
        }

        fn byte_size(&self) -> u64 {
            self.size
        }
    }

    #[test]
    fn oversized_files_are_dropped_in_order() {
        let alerts = RecordingAlerts::default();
        let files = vec![
            Picked { name: "notes.pdf", size: 10 * MB },
            Picked { name: "scan.png", size: 20 * MB },
            Picked { name: "brief.docx", size: 5 * MB },
        ];

        let kept = accept_files(files, MAX_UPLOAD_BYTES, &alerts);

        assert_eq!(kept.iter().map(|f| f.name).collect::<Vec<_>>(), ["notes.pdf", "brief.docx"]);
        assert_eq!(
            alerts.messages.borrow().as_slice(),
            ["File scan.png is too large. Maximum size is 16MB."]
        );
    }

    #[test]
    fn exactly_at_limit_is_accepted() {
        let alerts = RecordingAlerts::default();
        let kept = accept_files(vec![Picked { name: "a", size: MAX_UPLOAD_BYTES }], MAX_UPLOAD_BYTES, &alerts);
        assert_eq!(kept.len(), 1);
        assert!(alerts.messages.borrow().is_empty());
    }

    #[test]
    fn each_rejection_alerts_separately() {
        let alerts = RecordingAlerts::default();
        let files = vec![Picked { name: "x", size: 3 * MB }, Picked { name: "y", size: 4 * MB }];
        assert!(accept_files(files, 2 * MB, &alerts).is_empty());
        assert_eq!(alerts.messages.borrow().len(), 2);
    }

    #[test]
    fn limit_text_follows_the_configured_cap() {
        assert_eq!(format_limit(16 * MB), "16MB");
        assert_eq!(format_limit(3 * MB / 2), "1.5MB");
        assert_eq!(format_limit(500), "500 bytes");
    }
}
