use ortb_describe::derive::Describe;
use ortb_describe::ser::Extension;

use super::specification::{BitType, DataAssetType, ImageAssetType, ImageMimeType};
use crate::InvalidValueError;
use crate::macros::coded_accessors;
use crate::validate::{validate_in, validate_in_with_custom_range, validate_positive, validate_str_in};

// -----------------------------------------------------------------------------
// Assets

/// One asset requested for the native ad.
///
/// Exactly one of `title`, `img` or `data` is expected to be set.
#[derive(Debug, Clone, Default, PartialEq, Describe)]
#[ortb(type_path = "ortb_model::native_request::Assets", auto_register)]
pub struct Assets {
    /// Unique asset ID, assigned by exchange.
    #[ortb(required)]
    pub id: Option<i32>,
    /// Set to 1 if the asset is required.
    #[ortb(default = 0)]
    required: Option<i32>,
    pub title: Option<Title>,
    pub img: Option<Image>,
    pub data: Option<Data>,
    pub ext: Extension,
}

impl Assets {
    /// Creates an asset with the given ID.
    pub fn new(id: i32) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    coded_accessors! {
        /// Sets whether the asset is required, one of [`BitType`].
        required, set_required => validate_in::<BitType>;
    }
}

// -----------------------------------------------------------------------------
// Title

/// A title asset.
#[derive(Debug, Clone, Default, PartialEq, Describe)]
#[ortb(type_path = "ortb_model::native_request::Title", auto_register)]
pub struct Title {
    /// Maximum length of the text in the title element.
    #[ortb(required)]
    pub len: Option<u32>,
    pub ext: Extension,
}

// -----------------------------------------------------------------------------
// Image

/// An image asset.
///
/// # Examples
///
/// ```
/// use ortb_model::native_request::Image;
/// use ortb_model::native_request::specification::ImageAssetType;
///
/// let mut img = Image::default();
/// img.set_type(ImageAssetType::MAIN as i32).unwrap();
/// img.set_type(501).unwrap();
/// assert!(img.set_type(4).is_err());
/// assert_eq!(img.r#type(), Some(501));
///
/// img.add_mime("image/png").unwrap();
/// assert!(img.add_mime("image/bmp").is_err());
/// assert_eq!(img.mimes(), ["image/png"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Describe)]
#[ortb(type_path = "ortb_model::native_request::Image", auto_register)]
pub struct Image {
    /// Type of image element, see [`ImageAssetType`].
    #[ortb(rename = "type")]
    kind: Option<i32>,
    /// Width of the image in pixels.
    pub w: Option<i32>,
    /// Minimum requested width of the image in pixels.
    #[ortb(recommended)]
    pub wmin: Option<i32>,
    /// Height of the image in pixels.
    pub h: Option<i32>,
    /// Minimum requested height of the image in pixels.
    #[ortb(recommended)]
    pub hmin: Option<i32>,
    /// Accepted MIME types; empty means all.
    mimes: Vec<String>,
    pub ext: Extension,
}

impl Image {
    #[inline]
    pub fn r#type(&self) -> Option<i32> {
        self.kind
    }

    /// Sets the image type, see [`ImageAssetType`].
    ///
    /// Codes from 500 up are exchange-specific and always accepted.
    pub fn set_type(&mut self, kind: i32) -> Result<&mut Self, InvalidValueError> {
        validate_in_with_custom_range::<ImageAssetType>("type", kind)?;
        self.kind = Some(kind);
        Ok(self)
    }

    #[inline]
    pub fn mimes(&self) -> &[String] {
        &self.mimes
    }

    /// Appends an accepted MIME type, one of [`ImageMimeType`].
    pub fn add_mime(&mut self, mime: &str) -> Result<&mut Self, InvalidValueError> {
        validate_str_in::<ImageMimeType>("mimes", mime)?;
        self.mimes.push(mime.to_owned());
        Ok(self)
    }
}

// -----------------------------------------------------------------------------
// Data

/// A data asset, such as a rating or a price.
#[derive(Debug, Clone, Default, PartialEq, Describe)]
#[ortb(type_path = "ortb_model::native_request::Data", auto_register)]
pub struct Data {
    /// Type of data element, see [`DataAssetType`].
    #[ortb(required, rename = "type")]
    kind: Option<i32>,
    /// Maximum length of the text in the element's response.
    len: Option<i32>,
    pub ext: Extension,
}

impl Data {
    /// Creates a data asset of the given type.
    pub fn new(kind: i32) -> Result<Self, InvalidValueError> {
        let mut data = Self::default();
        data.set_type(kind)?;
        Ok(data)
    }

    #[inline]
    pub fn r#type(&self) -> Option<i32> {
        self.kind
    }

    /// Sets the data type, see [`DataAssetType`].
    ///
    /// Codes from 500 up are exchange-specific and always accepted.
    pub fn set_type(&mut self, kind: i32) -> Result<&mut Self, InvalidValueError> {
        validate_in_with_custom_range::<DataAssetType>("type", kind)?;
        self.kind = Some(kind);
        Ok(self)
    }

    coded_accessors! {
        /// Sets the maximum text length.
        len, set_len => validate_positive::<i32>;
    }
}
