use ortb_describe::derive::Describe;
use ortb_describe::ser::Extension;

use super::Link;

// -----------------------------------------------------------------------------
// Assets

/// One asset of the native ad response, answering the request asset with the same `id`.
#[derive(Debug, Clone, Default, PartialEq, Describe)]
#[ortb(type_path = "ortb_model::native_response::Assets", auto_register)]
pub struct Assets {
    #[ortb(required)]
    pub id: Option<i32>,
    /// Set to 1 if the asset is required.
    #[ortb(default = 0)]
    pub required: Option<i32>,
    pub title: Option<Title>,
    pub img: Option<Image>,
    pub data: Option<Data>,
    /// Link used when the asset itself is clicked.
    pub link: Option<Link>,
    pub ext: Extension,
}

impl Assets {
    pub fn new(id: i32) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    pub fn with_title(id: i32, title: Title) -> Self {
        Self {
            title: Some(title),
            ..Self::new(id)
        }
    }

    pub fn with_img(id: i32, img: Image) -> Self {
        Self {
            img: Some(img),
            ..Self::new(id)
        }
    }

    pub fn with_data(id: i32, data: Data) -> Self {
        Self {
            data: Some(data),
            ..Self::new(id)
        }
    }
}

// -----------------------------------------------------------------------------
// Title

#[derive(Debug, Clone, Default, PartialEq, Describe)]
#[ortb(type_path = "ortb_model::native_response::Title", auto_register)]
pub struct Title {
    #[ortb(required)]
    pub text: Option<String>,
    pub ext: Extension,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ext: Extension::new(),
        }
    }
}

// -----------------------------------------------------------------------------
// Image

#[derive(Debug, Clone, Default, PartialEq, Describe)]
#[ortb(type_path = "ortb_model::native_response::Image", auto_register)]
pub struct Image {
    /// URL of the image asset.
    #[ortb(required)]
    pub url: Option<String>,
    pub w: Option<i32>,
    pub h: Option<i32>,
    pub ext: Extension,
}

// -----------------------------------------------------------------------------
// Data

/// A data asset, such as a rating or a price.
#[derive(Debug, Clone, Default, PartialEq, Describe)]
#[ortb(type_path = "ortb_model::native_response::Data", auto_register)]
pub struct Data {
    /// Optional formatted label of the element.
    pub label: Option<String>,
    /// The formatted string of data to be displayed.
    #[ortb(required)]
    pub value: Option<String>,
    pub ext: Extension,
}

impl Data {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::default()
        }
    }
}
