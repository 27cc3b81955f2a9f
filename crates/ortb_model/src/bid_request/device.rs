use core::net::{Ipv4Addr, Ipv6Addr};

use ortb_describe::derive::Describe;
use ortb_describe::ser::Extension;

use super::specification::{BitType, ConnectionType, DeviceType};
use crate::InvalidValueError;
use crate::macros::coded_accessors;
use crate::validate::{validate_in, validate_positive};

// -----------------------------------------------------------------------------
// Device

/// The device through which the user is interacting with the impression.
///
/// # Examples
///
/// ```
/// use ortb_describe::ser::{Serializable, Value};
/// use ortb_model::bid_request::Device;
/// use ortb_model::bid_request::specification::DeviceType;
///
/// let mut device = Device::new();
/// device.ua = Some("Mozilla/5.0".into());
/// device.set_ip("192.0.2.1").unwrap();
/// device.set_devicetype(DeviceType::PHONE as i32).unwrap();
/// assert!(device.set_ip("2001:db8::1").is_err());
/// assert!(device.set_w(-1).is_err());
///
/// let map = device.to_map().unwrap();
/// assert_eq!(map.keys().collect::<Vec<_>>(), ["ua", "ip", "devicetype"]);
/// assert_eq!(map["devicetype"], Value::Int(4));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Describe)]
#[ortb(type_path = "ortb_model::bid_request::Device", auto_register)]
pub struct Device {
    /// Standard "Do Not Track" flag, 1 = do not track.
    #[ortb(recommended)]
    dnt: Option<i32>,
    /// Browser user agent string.
    #[ortb(recommended)]
    pub ua: Option<String>,
    /// IPv4 address closest to device.
    #[ortb(recommended)]
    ip: Option<String>,
    /// Location of the device, assumed to be the user's current location.
    #[ortb(recommended)]
    pub geo: Geo,
    /// Hardware device ID, hashed via SHA1.
    pub didsha1: Option<String>,
    /// Hardware device ID, hashed via MD5.
    pub didmd5: Option<String>,
    /// Platform device ID, hashed via SHA1.
    pub dpidsha1: Option<String>,
    /// Platform device ID, hashed via MD5.
    pub dpidmd5: Option<String>,
    /// IPv6 address closest to device.
    ipv6: Option<String>,
    /// Carrier or ISP.
    pub carrier: Option<String>,
    /// Browser language using ISO-639-1-alpha-2.
    pub language: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub os: Option<String>,
    pub osv: Option<String>,
    /// Hardware version of the device.
    pub hwv: Option<String>,
    /// Physical width of the screen in pixels.
    w: Option<i32>,
    /// Physical height of the screen in pixels.
    h: Option<i32>,
    /// Screen size as pixels per linear inch.
    ppi: Option<i32>,
    /// Ratio of physical pixels to device independent pixels.
    pxratio: Option<f64>,
    /// Support for JavaScript.
    js: Option<i32>,
    /// Whether the geolocation API is available to JavaScript in the banner.
    geofetch: Option<i32>,
    connectiontype: Option<i32>,
    devicetype: Option<i32>,
    /// Version of Flash supported by the browser.
    pub flashver: Option<String>,
    /// ID sanctioned for advertiser use in the clear.
    pub ifa: Option<String>,
    /// MAC address of the device, hashed via SHA1.
    pub macsha1: Option<String>,
    /// MAC address of the device, hashed via MD5.
    pub macmd5: Option<String>,
    /// "Limit Ad Tracking" signal, 1 = tracking must be limited.
    #[ortb(recommended)]
    lmt: Option<i32>,
    /// Mobile carrier as the concatenated MCC-MNC code, e.g. `310-005`.
    pub mccmnc: Option<String>,
    pub ext: Extension,
}

impl Device {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    coded_accessors! {
        /// Sets the "Do Not Track" flag, one of [`BitType`].
        dnt, set_dnt => validate_in::<BitType>;
        /// Sets JavaScript support, one of [`BitType`].
        js, set_js => validate_in::<BitType>;
        /// Sets geolocation API availability, one of [`BitType`].
        geofetch, set_geofetch => validate_in::<BitType>;
        /// Sets the "Limit Ad Tracking" flag, one of [`BitType`].
        lmt, set_lmt => validate_in::<BitType>;
        /// Sets the network connection type, one of [`ConnectionType`].
        connectiontype, set_connectiontype => validate_in::<ConnectionType>;
        /// Sets the general type of device, one of [`DeviceType`].
        devicetype, set_devicetype => validate_in::<DeviceType>;
        /// Sets the screen width in pixels.
        w, set_w => validate_positive::<i32>;
        /// Sets the screen height in pixels.
        h, set_h => validate_positive::<i32>;
        /// Sets the screen density.
        ppi, set_ppi => validate_positive::<i32>;
    }

    #[inline]
    pub fn ip(&self) -> Option<&str> {
        self.ip.as_deref()
    }

    /// Sets the IPv4 address.
    pub fn set_ip(&mut self, ip: &str) -> Result<&mut Self, InvalidValueError> {
        if ip.parse::<Ipv4Addr>().is_err() {
            return Err(InvalidValueError::InvalidAddress {
                field: "ip",
                value: ip.to_owned(),
            });
        }
        self.ip = Some(ip.to_owned());
        Ok(self)
    }

    #[inline]
    pub fn ipv6(&self) -> Option<&str> {
        self.ipv6.as_deref()
    }

    /// Sets the IPv6 address.
    pub fn set_ipv6(&mut self, ip: &str) -> Result<&mut Self, InvalidValueError> {
        if ip.parse::<Ipv6Addr>().is_err() {
            return Err(InvalidValueError::InvalidAddress {
                field: "ipv6",
                value: ip.to_owned(),
            });
        }
        self.ipv6 = Some(ip.to_owned());
        Ok(self)
    }

    #[inline]
    pub fn pxratio(&self) -> Option<f64> {
        self.pxratio
    }

    /// Sets the pixel ratio.
    pub fn set_pxratio(&mut self, pxratio: f64) -> Result<&mut Self, InvalidValueError> {
        self.pxratio = Some(validate_positive("pxratio", pxratio)?);
        Ok(self)
    }
}

// -----------------------------------------------------------------------------
// Geo

/// A geographic location.
#[derive(Debug, Clone, Default, PartialEq, Describe)]
#[ortb(type_path = "ortb_model::bid_request::Geo", auto_register)]
pub struct Geo {
    /// Latitude from -90.0 to +90.0, where negative is south.
    pub lat: Option<f64>,
    /// Longitude from -180.0 to +180.0, where negative is west.
    pub lon: Option<f64>,
    /// Source of location data.
    #[ortb(rename = "type")]
    pub kind: Option<i32>,
    /// Country code using ISO-3166-1-alpha-3.
    pub country: Option<String>,
    pub region: Option<String>,
    pub city: Option<String>,
    pub zip: Option<String>,
    /// Local time as +/- minutes from UTC.
    pub utcoffset: Option<i32>,
    pub ext: Extension,
}
