use imodels_core::DeviceFamily;

#[test]
fn classifies_by_identifier_prefix() {
    assert_eq!(DeviceFamily::from_identifier("iPhone16,1"), Some(DeviceFamily::IPhone));
    assert_eq!(DeviceFamily::from_identifier("iPod9,1"), Some(DeviceFamily::IPod));
    assert_eq!(DeviceFamily::from_identifier("iPad13,1"), Some(DeviceFamily::IPad));
    assert_eq!(DeviceFamily::from_identifier("Watch6,18"), Some(DeviceFamily::Watch));
    assert_eq!(DeviceFamily::from_identifier("AppleTV14,1"), Some(DeviceFamily::AppleTv));
    assert_eq!(
        DeviceFamily::from_identifier("RealityDevice14,1"),
        Some(DeviceFamily::RealityDevice)
    );
}

#[test]
fn classification_does_not_require_a_catalog_entry() {
    assert_eq!(DeviceFamily::from_identifier("iPhone99,9"), Some(DeviceFamily::IPhone));
}

#[test]
fn prefix_must_be_followed_by_a_digit() {
    assert_eq!(DeviceFamily::from_identifier("iPhone"), None);
    assert_eq!(DeviceFamily::from_identifier("iPhoneX"), None);
    assert_eq!(DeviceFamily::from_identifier("UnknownDevice1,1"), None);
    assert_eq!(DeviceFamily::from_identifier("x86_64"), None);
    assert_eq!(DeviceFamily::from_identifier(""), None);
}

#[test]
fn names_parse_back() {
    for family in DeviceFamily::ALL {
        assert_eq!(DeviceFamily::parse(family.as_str()), Some(family));
    }
    assert_eq!(DeviceFamily::parse("toaster"), None);
}

#[test]
fn serde_and_display_names() {
    assert_eq!(serde_json::to_string(&DeviceFamily::AppleTv).unwrap(), "\"apple_tv\"");
    assert_eq!(DeviceFamily::IPod.to_string(), "iPod touch");
    assert_eq!(DeviceFamily::RealityDevice.to_string(), "Apple Vision");
}
