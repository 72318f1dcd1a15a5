#[cfg(test)]
mod tests {
    use crate::screens::components::date_input::DateInput;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("expected a valid date")
    }

    fn type_text(input: &mut DateInput, text: &str) {
        for c in text.chars() {
            input.handle_char(c);
        }
    }

    #[test]
    fn valid_text_binds_the_date() {
        let mut input = DateInput::new("birthdate start".to_string(), true);
        type_text(&mut input, "2010-05-17");
        assert_eq!(input.value(), Some(date(2010, 5, 17)));
        assert_eq!(input.text(), "2010-05-17");
    }

    #[test]
    fn garbage_text_leaves_the_value_unbound() {
        let mut input = DateInput::new("birthdate start".to_string(), true);
        type_text(&mut input, "not-a-date");
        assert_eq!(input.value(), None);
    }

    #[test]
    fn trailing_garbage_keeps_the_last_valid_value() {
        let mut input = DateInput::new("birthdate start".to_string(), true);
        type_text(&mut input, "2010-05-17");
        type_text(&mut input, "9");
        assert_eq!(input.text(), "2010-05-179");
        assert_eq!(input.value(), Some(date(2010, 5, 17)));
    }

    #[test]
    fn impossible_calendar_date_is_a_parse_failure() {
        let mut input = DateInput::new("birthdate end".to_string(), true);
        type_text(&mut input, "2010-02-31");
        assert_eq!(input.value(), None);
        // a real leap day parses fine
        let mut leap = DateInput::new("birthdate end".to_string(), true);
        type_text(&mut leap, "2012-02-29");
        assert_eq!(leap.value(), Some(date(2012, 2, 29)));
    }

    #[test]
    fn external_set_reformats_the_text() {
        let mut input = DateInput::new("birthdate start".to_string(), true);
        input.set_value(Some(date(2009, 1, 2)));
        assert_eq!(input.text(), "2009-01-02");
        input.set_value(None);
        assert_eq!(input.text(), "");
        assert_eq!(input.value(), None);
    }

    #[test]
    fn edits_are_ignored_outside_writing_mode() {
        let mut input = DateInput::new("birthdate start".to_string(), false);
        type_text(&mut input, "2010-05-17");
        assert_eq!(input.text(), "");
        assert_eq!(input.value(), None);
    }
}
