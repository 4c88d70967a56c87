use std::fmt;

use serde::{Deserialize, Serialize};

/// Product line a hardware identifier belongs to.
///
/// Derived from the identifier's family prefix alone; it says nothing about
/// whether the catalog knows the identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DeviceFamily {
    #[serde(rename = "iphone")]
    IPhone,
    #[serde(rename = "ipod")]
    IPod,
    #[serde(rename = "ipad")]
    IPad,
    #[serde(rename = "watch")]
    Watch,
    #[serde(rename = "apple_tv")]
    AppleTv,
    #[serde(rename = "reality_device")]
    RealityDevice,
}

impl DeviceFamily {
    /// Every family, in catalog order.
    pub const ALL: [DeviceFamily; 6] = [
        DeviceFamily::IPhone,
        DeviceFamily::IPod,
        DeviceFamily::IPad,
        DeviceFamily::Watch,
        DeviceFamily::AppleTv,
        DeviceFamily::RealityDevice,
    ];

    /// Identifier prefix used by the vendor for this family.
    pub fn prefix(self) -> &'static str {
        match self {
            DeviceFamily::IPhone => "iPhone",
            DeviceFamily::IPod => "iPod",
            DeviceFamily::IPad => "iPad",
            DeviceFamily::Watch => "Watch",
            DeviceFamily::AppleTv => "AppleTV",
            DeviceFamily::RealityDevice => "RealityDevice",
        }
    }

    /// Stable lowercase name, as used in JSON and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            DeviceFamily::IPhone => "iphone",
            DeviceFamily::IPod => "ipod",
            DeviceFamily::IPad => "ipad",
            DeviceFamily::Watch => "watch",
            DeviceFamily::AppleTv => "apple_tv",
            DeviceFamily::RealityDevice => "reality_device",
        }
    }

    /// Consumer-facing product line name.
    pub fn display_name(self) -> &'static str {
        match self {
            DeviceFamily::IPhone => "iPhone",
            DeviceFamily::IPod => "iPod touch",
            DeviceFamily::IPad => "iPad",
            DeviceFamily::Watch => "Apple Watch",
            DeviceFamily::AppleTv => "Apple TV",
            DeviceFamily::RealityDevice => "Apple Vision",
        }
    }

    /// Classify an identifier by its `<FamilyName><Major>,<Minor>` prefix.
    ///
    /// The prefix must be followed by a digit, so `iPhoneX` or a bare `Watch`
    /// yield `None`.
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|family| {
            identifier
                .strip_prefix(family.prefix())
                .and_then(|rest| rest.chars().next())
                .is_some_and(|c| c.is_ascii_digit())
        })
    }

    /// Parse the lowercase name produced by [`DeviceFamily::as_str`].
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|family| family.as_str() == value)
    }
}

impl fmt::Display for DeviceFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
