use super::*;

#[test]
fn rfc3339_utc() {
    assert_eq!(format_member_since("2024-03-04T10:15:00Z"), "3/4/2024");
}

#[test]
fn rfc3339_with_offset_keeps_its_own_calendar_day() {
    assert_eq!(format_member_since("2023-12-31T23:30:00-05:00"), "12/31/2023");
}

#[test]
fn naive_timestamp_from_users_service() {
    assert_eq!(format_member_since("2022-11-09T08:00:00"), "11/9/2022");
}

#[test]
fn naive_timestamp_with_fraction() {
    assert_eq!(format_member_since("2022-11-09T08:00:00.123456"), "11/9/2022");
}

#[test]
fn bare_date() {
    assert_eq!(format_member_since("2021-07-20"), "7/20/2021");
}

#[test]
fn garbage_is_shown_verbatim() {
    assert_eq!(format_member_since("last tuesday"), "last tuesday");
    assert_eq!(format_member_since(""), "");
}
