//! Code lists of the bid request.

use ortb_describe::specification;

specification! {
    /// A boolean flag encoded as an integer.
    pub struct BitType: Int {
        NO = 0,
        YES = 1,
    }
}

specification! {
    /// Type of audio feed.
    pub struct FeedType: Int {
        MUSIC_SERVICE = 1,
        BROADCAST = 2,
        PODCAST = 3,
        CATCH_UP_RADIO = 4,
        WEB_RADIO = 5,
        VIDEO_GAME = 6,
        TEXT_TO_SPEACH = 7,
    }
}

specification! {
    /// Type of network connection.
    pub struct ConnectionType: Int {
        UNKNOWN = 0,
        ETHERNET = 1,
        WIFI = 2,
        CELLULAR_UNKNOWN = 3,
        CELLULAR_2G = 4,
        CELLULAR_3G = 5,
        CELLULAR_4G = 6,
    }
}

specification! {
    /// Type of device.
    pub struct DeviceType: Int {
        MOBILE_TABLET = 1,
        PERSONAL_COMPUTER = 2,
        CONNECTED_TV = 3,
        PHONE = 4,
        TABLET = 5,
        CONNECTED_DEVICE = 6,
        SET_TOP_BOX = 7,
    }
}

specification! {
    /// API frameworks supported by the placement.
    pub struct ApiFrameworks: Int {
        VPAID_1 = 1,
        VPAID_2 = 2,
        MRAID_1 = 3,
        ORMMA = 4,
        MRAID_2 = 5,
        MRAID_3 = 6,
        OMID_1 = 7,
    }
}

specification! {
    /// Creative attributes that can be blocked.
    pub struct CreativeAttributes: Int {
        AUDIO_AUTO_PLAY = 1,
        AUDIO_USER_INITIATED = 2,
        EXPANDABLE_AUTOMATIC = 3,
        EXPANDABLE_CLICK_INITIATED = 4,
        EXPANDABLE_ROLLOVER_INITIATED = 5,
        IN_BANNER_VIDEO_AUTO_PLAY = 6,
        IN_BANNER_VIDEO_USER_INITIATED = 7,
        POP = 8,
        PROVOCATIVE_OR_SUGGESTIVE = 9,
        SHAKY_FLASHING_FLICKERING = 10,
        SURVEYS = 11,
        TEXT_ONLY = 12,
        USER_INTERACTIVE = 13,
        WINDOWS_DIALOG_OR_ALERT = 14,
        HAS_AUDIO_ON_OFF_BUTTON = 15,
        AD_PROVIDES_SKIP_BUTTON = 16,
        ADOBE_FLASH = 17,
    }
}

#[cfg(test)]
mod tests {
    use ortb_describe::constants::Specification;

    use super::{CreativeAttributes, FeedType};

    #[test]
    fn tables() {
        assert_eq!(FeedType::all().len(), 7);
        assert_eq!(FeedType::name_of(&7_i64), Some("TEXT_TO_SPEACH"));
        assert!(CreativeAttributes::contains(&17_i64));
        assert!(!CreativeAttributes::contains(&0_i64));
    }
}
