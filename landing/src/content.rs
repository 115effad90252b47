//! Static copy, links and asset paths for the landing page.
//!
//! Everything the page says lives here so the shell, the view and the
//! structured data never drift apart. All copy is Tagalog.

use serde::Serialize;

/// Application name as shown in the structured data.
pub const APP_NAME: &str = "BITA";

/// Document `<title>`.
pub const SITE_TITLE: &str = "BITA - Terminolohiya sa Pag-kakabod";

/// Document description meta tag.
pub const SITE_DESCRIPTION: &str =
    "Aplikasyon na tutulong sa iyo na maintindihan ang mga terminolohiya sa pag-kakabod.";

/// Value of `<html lang>`.
pub const SITE_LANG: &str = "tl";

/// Global font stylesheet (Inter, latin subset).
pub const FONT_STYLESHEET: &str =
    "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;700&display=swap&subset=latin";

pub const SUBTITLE: &str = "BITA terminolohiya sa pag kakabod";

pub const INTRO: &str = "Maligayang pagdating sa BITA! Ang aplikasyon na tutulong sa iyo na \
maintindihan ang mga terminolohiya sa pag-kakabod. Madali at simple lang ang paggamit nito para \
sa mga baguhan! Kaya tara na!";

/// Feature list, rendered in this order.
pub const FEATURES: [&str; 3] = [
    "Komprehensibong listahan ng mga terminolohiya",
    "Kwento bawal levels",
    "Mini Games na nakakaengganyo",
];

pub const CTA_LABEL: &str = "Mag-download Ngayon";

pub const INSTALL_HINT: &str = "I-install ang APK file pagkatapos mag-download";

/// Where the APK lives. Third-party host, reachability is not checked.
pub const DOWNLOAD_URL: &str = "https://www.mediafire.com/file/8quubf05bortdiw/BITA.apk/file";

/// The download opens in a new browsing context...
pub const LINK_TARGET: &str = "_blank";

/// ...without opener access and without a referrer.
pub const LINK_REL: &str = "noopener noreferrer";

/// An image served from `public/images/`, with its requested display size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Asset {
    pub src: &'static str,
    pub alt: &'static str,
    pub width: u32,
    pub height: u32,
}

/// Full-bleed sky; sized by CSS (`object-fit: cover`), the numbers are its natural size hint.
pub const BACKGROUND: Asset = Asset {
    src: "/images/bitabackground.png",
    alt: "Sky background",
    width: 1920,
    height: 1080,
};

pub const ISLAND: Asset = Asset {
    src: "/images/floating-island.png",
    alt: "Background island",
    width: 200,
    height: 200,
};

pub const HERO_ICON: Asset = Asset {
    src: "/images/bitaicon.png",
    alt: "BITA",
    width: 400,
    height: 400,
};

/// schema.org `SoftwareApplication` record embedded as JSON-LD.
#[derive(Debug, Serialize)]
pub struct StructuredData {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "inLanguage")]
    pub in_language: &'static str,
    #[serde(rename = "applicationCategory")]
    pub application_category: &'static str,
    #[serde(rename = "operatingSystem")]
    pub operating_system: &'static str,
    #[serde(rename = "downloadUrl")]
    pub download_url: &'static str,
    #[serde(rename = "featureList")]
    pub feature_list: &'static [&'static str],
}

impl StructuredData {
    pub fn for_site() -> Self {
        Self {
            context: "https://schema.org",
            kind: "SoftwareApplication",
            name: APP_NAME,
            description: SITE_DESCRIPTION,
            in_language: SITE_LANG,
            application_category: "EducationalApplication",
            operating_system: "Android",
            download_url: DOWNLOAD_URL,
            feature_list: &FEATURES,
        }
    }

    /// Serialized record, ready for a `<script type="application/ld+json">` body.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn metadata_matches_configured_strings() {
        assert_eq!(SITE_TITLE, "BITA - Terminolohiya sa Pag-kakabod");
        assert_eq!(
            SITE_DESCRIPTION,
            "Aplikasyon na tutulong sa iyo na maintindihan ang mga terminolohiya sa pag-kakabod."
        );
        assert_eq!(SITE_LANG, "tl");
    }

    #[test]
    fn link_hardening_hides_origin_and_opener() {
        let rel: Vec<&str> = LINK_REL.split_whitespace().collect();
        assert!(rel.contains(&"noopener"));
        assert!(rel.contains(&"noreferrer"));
        assert_eq!(LINK_TARGET, "_blank");
    }

    #[test]
    fn download_points_at_the_apk() {
        assert!(DOWNLOAD_URL.starts_with("https://"));
        assert!(DOWNLOAD_URL.contains("BITA.apk"));
    }

    #[test]
    fn assets_are_rooted_paths() {
        for asset in [BACKGROUND, ISLAND, HERO_ICON] {
            assert!(asset.src.starts_with("/images/"), "{}", asset.src);
            assert!(asset.width > 0 && asset.height > 0);
        }
        assert_eq!((HERO_ICON.width, HERO_ICON.height), (400, 400));
        assert_eq!((ISLAND.width, ISLAND.height), (200, 200));
    }

    #[test]
    fn structured_data_reuses_site_copy() {
        let json = StructuredData::for_site().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["@type"], "SoftwareApplication");
        assert_eq!(value["name"], APP_NAME);
        assert_eq!(value["description"], SITE_DESCRIPTION);
        assert_eq!(value["downloadUrl"], DOWNLOAD_URL);
        assert_eq!(value["featureList"].as_array().map(Vec::len), Some(3));
        assert_eq!(value["featureList"][0], FEATURES[0]);
    }
}
