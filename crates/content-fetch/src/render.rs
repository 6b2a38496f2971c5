//! Turning decoded payloads into mounted elements.

use crate::media::{inspect_image, ObjectUrl};
use crate::surface::{DisplaySurface, Element};
use crate::types::DecodedPayload;

/// Build the element for a payload: images for bytes, paragraphs for text.
pub fn to_element(payload: DecodedPayload) -> Element {
    match payload {
        DecodedPayload::Binary(bytes) => {
            let info = inspect_image(&bytes);
            Element::Image {
                src: ObjectUrl::from_bytes(&bytes, &info.mime),
                mime: info.mime,
                width: info.width,
                height: info.height,
            }
        }
        DecodedPayload::Text(text) => Element::Paragraph { text },
    }
}

/// Append one element per payload, in iteration order.
///
/// Returns the number of elements mounted.
pub fn mount<S, I>(surface: &mut S, payloads: I) -> usize
where
    S: DisplaySurface + ?Sized,
    I: IntoIterator<Item = DecodedPayload>,
{
    let mut mounted = 0;
    for payload in payloads {
        let element = to_element(payload);
        tracing::debug!("mounting <{}>", element.tag());
        surface.append(element);
        mounted += 1;
    }
    mounted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MemorySurface;

    #[test]
    fn test_binary_becomes_image() {
        let element = to_element(DecodedPayload::Binary(b"\x00\x01".to_vec()));
        match element {
            Element::Image { src, mime, .. } => {
                assert_eq!(mime, crate::media::FALLBACK_MIME);
                assert_eq!(src.payload(), Some(b"\x00\x01".to_vec()));
            }
            other => panic!("expected image, got {other:?}"),
        }
    }

    #[test]
    fn test_text_becomes_paragraph() {
        let element = to_element(DecodedPayload::Text("Hello World".into()));
        assert_eq!(
            element,
            Element::Paragraph {
                text: "Hello World".into()
            }
        );
    }

    #[test]
    fn test_mount_preserves_order() {
        let mut surface = MemorySurface::new();
        let count = mount(
            &mut surface,
            vec![
                DecodedPayload::Binary(vec![1]),
                DecodedPayload::Binary(vec![2]),
                DecodedPayload::Text("t".into()),
            ],
        );
        assert_eq!(count, 3);
        let tags: Vec<_> = surface.elements().iter().map(Element::tag).collect();
        assert_eq!(tags, vec!["img", "img", "p"]);
    }
}
