#[cfg(test)]
mod tests {
    use crate::{
        errors::ValidationError,
        shapes::league::{derive_age_groups, parse_group_count, LeagueDraft},
    };
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("expected a valid date")
    }

    #[test]
    fn derivation_produces_defaults_for_any_count() {
        for n in [0u32, 1, 3, 12] {
            let groups = derive_age_groups(n);
            assert_eq!(groups.len(), n as usize);
            for (i, group) in groups.iter().enumerate() {
                assert_eq!(group.name, format!("Group {}", i + 1));
                assert!(group.birthdate_start.is_none());
                assert!(group.birthdate_end.is_none());
            }
        }
    }

    #[test]
    fn invalid_count_text_degrades_to_zero() {
        assert_eq!(parse_group_count(""), 0);
        assert_eq!(parse_group_count("abc"), 0);
        assert_eq!(parse_group_count("-3"), 0);
        assert_eq!(parse_group_count("2.5"), 0);
        assert_eq!(parse_group_count(" 7 "), 7);
    }

    #[test]
    fn count_change_regenerates_and_discards_edits() {
        let mut draft = LeagueDraft::default();
        assert!(draft.set_group_count(3));
        draft.age_groups[1].name = "U12".to_string();
        draft.age_groups[1].birthdate_start = Some(date(2012, 1, 1));
        // changing the value away and back resets everything
        assert!(draft.set_group_count(2));
        assert!(draft.set_group_count(3));
        assert_eq!(draft.age_groups[1].name, "Group 2");
        assert!(draft.age_groups[1].birthdate_start.is_none());
    }

    #[test]
    fn same_value_count_is_a_no_op() {
        let mut draft = LeagueDraft::default();
        assert!(draft.set_group_count(3));
        draft.age_groups[2].name = "U14".to_string();
        assert!(!draft.set_group_count(3));
        assert_eq!(draft.age_groups[2].name, "U14");
        assert_eq!(draft.age_groups.len(), 3);
    }

    #[test]
    fn validation_requires_a_league_name() {
        let mut draft = LeagueDraft::default();
        draft.set_group_count(1);
        draft.age_groups[0].birthdate_start = Some(date(2010, 1, 1));
        assert_eq!(draft.validate(), Err(ValidationError::EmptyLeagueName));
    }

    #[test]
    fn validation_requires_at_least_one_group() {
        let draft = LeagueDraft {
            league_name: "Spring League".to_string(),
            ..LeagueDraft::default()
        };
        assert_eq!(draft.validate(), Err(ValidationError::NoAgeGroups));
    }

    #[test]
    fn validation_flags_the_first_incomplete_group() {
        let mut draft = LeagueDraft {
            league_name: "Spring League".to_string(),
            ..LeagueDraft::default()
        };
        draft.set_group_count(3);
        draft.age_groups[0].birthdate_end = Some(date(2011, 12, 31));
        draft.age_groups[2].birthdate_start = Some(date(2012, 1, 1));
        // group 2 has a default name but neither bound
        assert_eq!(draft.validate(), Err(ValidationError::IncompleteAgeGroup(2)));
    }

    #[test]
    fn validation_accepts_a_complete_draft() {
        let mut draft = LeagueDraft {
            league_name: "Spring League".to_string(),
            ..LeagueDraft::default()
        };
        draft.set_group_count(2);
        draft.age_groups[0].birthdate_start = Some(date(2010, 1, 1));
        draft.age_groups[1].birthdate_end = Some(date(2009, 12, 31));
        assert!(draft.validate().is_ok());
    }
}
