//! Image optimization: image URL → responsive picture fragment.

use url::Url;

use crate::render::{Img, Loading, Node, Picture, PictureSource};

/// One responsive width tier, optionally gated by a media query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakpoint {
    pub media: Option<String>,
    pub width: u32,
}

impl Breakpoint {
    pub fn width(width: u32) -> Self {
        Self { media: None, width }
    }
}

/// Tiers used when the caller passes none.
pub fn default_breakpoints() -> Vec<Breakpoint> {
    vec![
        Breakpoint {
            media: Some("(min-width: 600px)".to_string()),
            width: 2000,
        },
        Breakpoint::width(750),
    ]
}

/// Builds a renderable picture for an image.
pub trait ImageOptimizer: Send + Sync {
    fn optimize(&self, src: &str, alt: &str, eager: bool, breakpoints: &[Breakpoint]) -> Node;
}

/// Emits webp sources plus an original-format fallback, addressing the
/// image service through `width`, `format` and `optimize` query parameters.
#[derive(Debug, Clone)]
pub struct ResponsivePictureOptimizer {
    base: Url,
}

impl ResponsivePictureOptimizer {
    /// `base` is the page URL image references are resolved against.
    pub fn new(base: Url) -> Self {
        Self { base }
    }

    fn pathname(&self, src: &str) -> String {
        match self.base.join(src) {
            Ok(url) => url.path().to_string(),
            Err(err) => {
                tracing::debug!("cannot resolve image {} against {}: {}", src, self.base, err);
                src.to_string()
            }
        }
    }
}

impl ImageOptimizer for ResponsivePictureOptimizer {
    fn optimize(&self, src: &str, alt: &str, eager: bool, breakpoints: &[Breakpoint]) -> Node {
        let defaults;
        let breakpoints = if breakpoints.is_empty() {
            defaults = default_breakpoints();
            &defaults[..]
        } else {
            breakpoints
        };

        let pathname = self.pathname(src);
        let ext = pathname
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .unwrap_or(&pathname);

        let mut sources: Vec<PictureSource> = breakpoints
            .iter()
            .map(|br| PictureSource {
                media: br.media.clone(),
                mime: Some("image/webp".to_string()),
                srcset: format!("{}?width={}&format=webply&optimize=medium", pathname, br.width),
            })
            .collect();

        let mut img = None;
        for (i, br) in breakpoints.iter().enumerate() {
            let srcset = format!("{}?width={}&format={}&optimize=medium", pathname, br.width, ext);
            if i + 1 < breakpoints.len() {
                sources.push(PictureSource {
                    media: br.media.clone(),
                    mime: None,
                    srcset,
                });
            } else {
                img = Some(Img {
                    src: srcset,
                    alt: alt.to_string(),
                    loading: if eager { Loading::Eager } else { Loading::Lazy },
                });
            }
        }

        Node::Picture(Picture { sources, img })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn optimizer() -> ResponsivePictureOptimizer {
        ResponsivePictureOptimizer::new(Url::parse("https://example.com/menus/lunch").unwrap())
    }

    fn picture(node: Node) -> Picture {
        match node {
            Node::Picture(p) => p,
            other => panic!("expected picture, got {:?}", other),
        }
    }

    #[test]
    fn single_tier_yields_webp_source_and_lazy_img() {
        let p = picture(optimizer().optimize(
            "./media_123.png?width=2000",
            "",
            false,
            &[Breakpoint::width(120)],
        ));
        assert_eq!(p.sources.len(), 1);
        assert_eq!(
            p.sources[0].srcset,
            "/menus/media_123.png?width=120&format=webply&optimize=medium"
        );
        assert_eq!(p.sources[0].mime.as_deref(), Some("image/webp"));
        let img = p.img.unwrap();
        assert_eq!(img.src, "/menus/media_123.png?width=120&format=png&optimize=medium");
        assert_eq!(img.loading, Loading::Lazy);
    }

    #[test]
    fn absolute_image_uses_its_own_path() {
        let p = picture(optimizer().optimize(
            "https://cdn.example.com/a/b.jpeg",
            "alt",
            true,
            &[Breakpoint::width(120)],
        ));
        let img = p.img.unwrap();
        assert_eq!(img.src, "/a/b.jpeg?width=120&format=jpeg&optimize=medium");
        assert_eq!(img.alt, "alt");
        assert_eq!(img.loading, Loading::Eager);
    }

    #[test]
    fn empty_breakpoints_use_defaults() {
        let p = picture(optimizer().optimize("/x.png", "", false, &[]));
        // Two webp sources plus one fallback source for the gated tier.
        assert_eq!(p.sources.len(), 3);
        assert_eq!(p.sources[2].media.as_deref(), Some("(min-width: 600px)"));
        assert!(p.img.unwrap().src.contains("width=750"));
    }
}
