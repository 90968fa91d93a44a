use crate::model::HistoryEntry;

/// History as pretty-printed JSON, newest first, suitable for piping into
/// other tooling.
pub fn render_history(entries: &[HistoryEntry]) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Prediction;

    #[test]
    fn renders_wire_field_names() {
        let entries = vec![HistoryEntry {
            prediction: Prediction {
                label: "gatos".into(),
                confidence: 0.92,
                model: None,
                meta: serde_json::Value::Null,
            },
            captured_at: "2026-08-25 10:30:00".into(),
        }];
        let out = render_history(&entries).unwrap();
        assert!(out.contains("\"class\": \"gatos\""));
        assert!(out.contains("\"captured_at\""));
    }

    #[test]
    fn empty_history_renders_as_empty_array() {
        assert_eq!(render_history(&[]).unwrap(), "[]");
    }
}
