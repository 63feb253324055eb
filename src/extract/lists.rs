//! Multi-value fields.

use super::{non_empty, Waits};
use crate::selectors::product;
use crate::session::Session;

/// Feature bullets. Every list item must carry a text span, or the whole
/// field is treated as missing.
pub fn description<S: Session + ?Sized>(session: &S, waits: &Waits) -> Option<Vec<String>> {
    let list = session.wait_until_present(&product::DESCRIPTION_LIST, waits.primary)?;
    let items = list
        .find_all(&product::DESCRIPTION_ITEM)
        .iter()
        .map(|li| li.find(&product::DESCRIPTION_TEXT).map(|span| span.text().trim().to_string()))
        .collect::<Option<Vec<_>>>()?;
    (!items.is_empty()).then_some(items)
}

/// Gallery thumbnail sources, once every thumbnail is visible.
pub fn featured_images<S: Session + ?Sized>(session: &S, waits: &Waits) -> Option<Vec<String>> {
    let images: Vec<String> = session
        .wait_until_visible(&product::GALLERY_IMAGES, waits.gallery)?
        .iter()
        .filter_map(|img| img.attr("src").and_then(non_empty))
        .collect();
    (!images.is_empty()).then_some(images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::StaticSession;
    use crate::test_utils::WAITS;

    fn on(html: &str) -> StaticSession {
        let mut s = StaticSession::new().with_page("https://shop.test/dp/X", html);
        s.navigate_to("https://shop.test/dp/X").unwrap();
        s
    }

    #[test]
    fn item_without_span_spoils_description() {
        let s = on(r#"<ul class="a-unordered-list a-vertical a-spacing-mini">
            <li><span>Fits most burners</span></li><li>loose text</li></ul>"#);
        assert_eq!(description(&s, &WAITS), None);
    }

    #[test]
    fn empty_list_is_missing() {
        let s = on(r#"<ul class="a-unordered-list a-vertical a-spacing-mini"></ul>"#);
        assert_eq!(description(&s, &WAITS), None);
    }

    #[test]
    fn hidden_thumbnail_spoils_gallery() {
        let s = on(r#"<div id="altImages"><ul>
            <li data-ux-click><img src="https://img.test/1.jpg"></li>
            <li data-ux-click style="display:none"><img src="https://img.test/2.jpg"></li>
            </ul></div>"#);
        assert_eq!(featured_images(&s, &WAITS), None);
    }

    #[test]
    fn video_thumbnails_are_skipped() {
        let s = on(r#"<div id="altImages"><ul>
            <li data-ux-click><img src="https://img.test/1.jpg"></li>
            <li class="videoThumbnail"><img src="https://img.test/video.jpg"></li>
            <li data-ux-click><img></li>
            </ul></div>"#);
        assert_eq!(
            featured_images(&s, &WAITS),
            Some(vec!["https://img.test/1.jpg".to_string()])
        );
    }
}
