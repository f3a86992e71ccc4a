use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct Assets;

impl Assets {
    pub fn get_svg_handle(name: &str) -> Option<iced::widget::svg::Handle> {
        Self::get(&format!("icons/{name}"))
            .map(|data| iced::widget::svg::Handle::from_memory(data.data))
    }
}

/// PNG bytes for the window icon, decoded once at startup.
pub fn window_icon_png() -> Option<Vec<u8>> {
    Assets::get("icon.png").map(|data| data.data.into_owned())
}

/// The collection that ships inside the binary.
pub fn sample_collection() -> String {
    Assets::get("sample/bookstore.json")
        .map(|data| String::from_utf8_lossy(&data.data).into_owned())
        .expect("Failed to load embedded sample collection")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_collection_is_valid_json() {
        let value: serde_json::Value = serde_json::from_str(&sample_collection()).unwrap();
        assert!(value.get("info").is_some());
    }

    #[test]
    fn test_all_icon_files_embedded() {
        for name in [
            "menu.svg",
            "pin.svg",
            "close.svg",
            "chevron-down.svg",
            "chevron-right.svg",
            "copy.svg",
            "expand.svg",
        ] {
            assert!(
                Assets::get_svg_handle(name).is_some(),
                "missing icon asset {name}"
            );
        }
    }

    #[test]
    fn test_window_icon_embedded() {
        assert!(window_icon_png().is_some());
    }
}
