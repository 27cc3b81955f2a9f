//! Code lists of the native ad request.
//!
//! Asset type codes from 500 up are exchange-specific and accepted as-is.

use ortb_describe::specification;

specification! {
    /// A boolean flag encoded as an integer.
    pub struct BitType: Int {
        NO = 0,
        YES = 1,
    }
}

specification! {
    /// Role of an image asset.
    pub struct ImageAssetType: Int {
        ICON = 1,
        LOGO = 2,
        MAIN = 3,
    }
}

specification! {
    /// Accepted image MIME types.
    pub struct ImageMimeType: Str {
        JPG = "image/jpg",
        JPEG = "image/jpeg",
        GIF = "image/gif",
        PNG = "image/png",
    }
}

specification! {
    /// Role of a data asset.
    pub struct DataAssetType: Int {
        SPONSORED = 1,
        DESC = 2,
        RATING = 3,
        LIKES = 4,
        DOWNLOADS = 5,
        PRICE = 6,
        SALEPRICE = 7,
        PHONE = 8,
        ADDRESS = 9,
        DESC2 = 10,
        DISPLAYURL = 11,
        CTATEXT = 12,
    }
}
