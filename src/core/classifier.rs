use crate::domain::model::{SeriesGroup, SeriesKey, StatusColor, StatusEntry};

pub fn series_of(code: u16) -> u16 {
    code / 100
}

pub fn series_key(entry: &StatusEntry) -> SeriesKey {
    match entry {
        StatusEntry::Numeric(code) => SeriesKey::Numeric(series_of(*code)),
        StatusEntry::TimeoutProbe => SeriesKey::Special,
    }
}

/// 依系列分組，分組順序與組內順序都沿用輸入中首次出現的順序
pub fn group_entries(entries: &[StatusEntry]) -> Vec<SeriesGroup> {
    let mut groups: Vec<SeriesGroup> = Vec::new();

    for entry in entries {
        let key = series_key(entry);
        match groups.iter_mut().find(|group| group.key == key) {
            Some(group) => group.entries.push(*entry),
            None => groups.push(SeriesGroup {
                key,
                title: series_title(&key),
                entries: vec![*entry],
            }),
        }
    }

    groups
}

pub fn series_title(key: &SeriesKey) -> String {
    match key {
        SeriesKey::Special => "Special Cases".to_string(),
        SeriesKey::Numeric(2) => "Success Responses (2xx)".to_string(),
        SeriesKey::Numeric(3) => "Redirection Messages (3xx)".to_string(),
        SeriesKey::Numeric(4) => "Client Error Responses (4xx)".to_string(),
        SeriesKey::Numeric(5) => "Server Error Responses (5xx)".to_string(),
        SeriesKey::Numeric(series) => format!("{}xx Status Codes", series),
    }
}

pub fn status_color(entry: &StatusEntry) -> StatusColor {
    match entry {
        StatusEntry::TimeoutProbe => StatusColor::Purple,
        StatusEntry::Numeric(code) => match code {
            200..=299 => StatusColor::Emerald,
            300..=399 => StatusColor::Blue,
            400..=499 => StatusColor::Amber,
            500.. => StatusColor::Rose,
            _ => StatusColor::Gray,
        },
    }
}

/// 卡片背景、邊框、文字的 Tailwind class，提供給 JSON 輸出的前端使用
pub fn color_classes(color: StatusColor) -> String {
    format!("bg-{0}-50 border-{0}-200 text-{0}-700", color)
}

pub fn entry_title(entry: &StatusEntry) -> String {
    match entry {
        StatusEntry::Numeric(code) => format!("Status {}", code),
        StatusEntry::TimeoutProbe => "Timeout Test".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::StatusEntry::{Numeric, TimeoutProbe};

    #[test]
    fn test_series_of_uses_hundreds_digit() {
        assert_eq!(series_of(100), 1);
        assert_eq!(series_of(199), 1);
        assert_eq!(series_of(200), 2);
        assert_eq!(series_of(599), 5);
        assert_eq!(series_of(999), 9);
    }

    #[test]
    fn test_group_reference_codes() {
        let entries = [
            Numeric(200),
            Numeric(400),
            Numeric(401),
            Numeric(403),
            Numeric(404),
            Numeric(500),
        ];

        let groups = group_entries(&entries);

        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].key, SeriesKey::Numeric(2));
        assert_eq!(groups[0].title, "Success Responses (2xx)");
        assert_eq!(groups[0].entries, vec![Numeric(200)]);
        assert_eq!(groups[1].key, SeriesKey::Numeric(4));
        assert_eq!(groups[1].title, "Client Error Responses (4xx)");
        assert_eq!(
            groups[1].entries,
            vec![Numeric(400), Numeric(401), Numeric(403), Numeric(404)]
        );
        assert_eq!(groups[2].key, SeriesKey::Numeric(5));
        assert_eq!(groups[2].title, "Server Error Responses (5xx)");
        assert_eq!(groups[2].entries, vec![Numeric(500)]);
    }

    #[test]
    fn test_group_order_follows_first_encounter() {
        let entries = [
            Numeric(503),
            TimeoutProbe,
            Numeric(201),
            Numeric(500),
            Numeric(204),
        ];

        let groups = group_entries(&entries);
        let keys: Vec<SeriesKey> = groups.iter().map(|g| g.key).collect();

        assert_eq!(
            keys,
            vec![SeriesKey::Numeric(5), SeriesKey::Special, SeriesKey::Numeric(2)]
        );
        assert_eq!(groups[0].entries, vec![Numeric(503), Numeric(500)]);
        assert_eq!(groups[1].title, "Special Cases");
        assert_eq!(groups[2].entries, vec![Numeric(201), Numeric(204)]);
    }

    #[test]
    fn test_grouping_is_a_partition() {
        let entries = [
            Numeric(302),
            Numeric(200),
            Numeric(404),
            TimeoutProbe,
            Numeric(301),
            Numeric(102),
            Numeric(404),
            Numeric(599),
        ];

        let groups = group_entries(&entries);

        let mut flattened: Vec<StatusEntry> =
            groups.iter().flat_map(|g| g.entries.clone()).collect();
        assert_eq!(flattened.len(), entries.len());

        let mut expected = entries.to_vec();
        let order = |e: &StatusEntry| match e {
            Numeric(code) => *code as u32,
            TimeoutProbe => u32::MAX,
        };
        flattened.sort_by_key(order);
        expected.sort_by_key(order);
        assert_eq!(flattened, expected);

        for group in &groups {
            assert!(group.entries.iter().all(|e| series_key(e) == group.key));
        }
    }

    #[test]
    fn test_grouping_is_idempotent() {
        let entries = [Numeric(500), Numeric(200), TimeoutProbe, Numeric(404)];
        assert_eq!(group_entries(&entries), group_entries(&entries));
    }

    #[test]
    fn test_series_titles_are_total() {
        assert_eq!(series_title(&SeriesKey::Numeric(3)), "Redirection Messages (3xx)");
        assert_eq!(series_title(&SeriesKey::Numeric(1)), "1xx Status Codes");
        assert_eq!(series_title(&SeriesKey::Numeric(7)), "7xx Status Codes");
        for series in 0..=9 {
            assert!(!series_title(&SeriesKey::Numeric(series)).is_empty());
        }
    }

    #[test]
    fn test_status_colors() {
        assert_eq!(status_color(&TimeoutProbe), StatusColor::Purple);
        assert_eq!(status_color(&Numeric(200)), StatusColor::Emerald);
        assert_eq!(status_color(&Numeric(299)), StatusColor::Emerald);
        assert_eq!(status_color(&Numeric(301)), StatusColor::Blue);
        assert_eq!(status_color(&Numeric(404)), StatusColor::Amber);
        assert_eq!(status_color(&Numeric(500)), StatusColor::Rose);
        assert_eq!(status_color(&Numeric(799)), StatusColor::Rose);
        assert_eq!(status_color(&Numeric(101)), StatusColor::Gray);
    }

    #[test]
    fn test_entry_titles_and_classes() {
        assert_eq!(entry_title(&Numeric(403)), "Status 403");
        assert_eq!(entry_title(&TimeoutProbe), "Timeout Test");
        assert_eq!(
            color_classes(StatusColor::Emerald),
            "bg-emerald-50 border-emerald-200 text-emerald-700"
        );
    }
}
