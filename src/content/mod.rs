// SPDX-License-Identifier: MPL-2.0
//! The showcase content model: collections of slides presented on the page.
//!
//! Content comes from one of two places: the embedded sample showcase
//! (always available, ships inside the binary) or a user-provided content
//! directory with one subdirectory per collection. Either way the result is
//! a [`Showcase`] holding decoded images; nothing is reloaded at runtime.

pub mod scan;

use crate::error::ContentError;
use crate::i18n::I18n;
use crate::media::image::{rasterize_svg, ImageData};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/content/"]
struct ContentAsset;

/// One image within a collection carousel.
#[derive(Debug, Clone)]
pub struct Slide {
    pub image: ImageData,
    /// File or asset name the image came from, shown in replacement messages.
    pub source_name: String,
}

/// A titled group of slides, rendered as one carousel card.
#[derive(Debug, Clone)]
pub struct Collection {
    pub title: String,
    pub description: String,
    pub slides: Vec<Slide>,
}

/// Everything shown on the page, in display order.
#[derive(Debug, Clone, Default)]
pub struct Showcase {
    pub collections: Vec<Collection>,
}

/// Addresses a single slide within the showcase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideRef {
    pub collection: usize,
    pub slide: usize,
}

impl Showcase {
    pub fn collection_count(&self) -> usize {
        self.collections.len()
    }

    pub fn slide_count(&self, collection: usize) -> Option<usize> {
        self.collections.get(collection).map(|c| c.slides.len())
    }

    pub fn slide(&self, slide_ref: SlideRef) -> Option<&Slide> {
        self.collections
            .get(slide_ref.collection)
            .and_then(|c| c.slides.get(slide_ref.slide))
    }

    /// Whether the reference points at an existing slide.
    pub fn contains(&self, slide_ref: SlideRef) -> bool {
        self.slide(slide_ref).is_some()
    }

    /// Swaps the image of an existing slide, in memory only.
    ///
    /// Returns `false` if the reference no longer points at a slide.
    pub fn replace_slide_image(
        &mut self,
        slide_ref: SlideRef,
        image: ImageData,
        source_name: String,
    ) -> bool {
        let Some(slide) = self
            .collections
            .get_mut(slide_ref.collection)
            .and_then(|c| c.slides.get_mut(slide_ref.slide))
        else {
            return false;
        };
        slide.image = image;
        slide.source_name = source_name;
        true
    }

    /// Builds the embedded sample showcase.
    ///
    /// Collection titles and descriptions are resolved once against the
    /// startup locale. Assets that fail to decode are replaced with a
    /// placeholder and reported, so the page layout never collapses.
    pub fn embedded(i18n: &I18n) -> (Self, Vec<ContentError>) {
        let mut collections = Vec::with_capacity(SAMPLE_COLLECTIONS.len());
        let mut problems = Vec::new();

        for sample in SAMPLE_COLLECTIONS {
            let mut slides = Vec::with_capacity(sample.assets.len());
            for asset_name in sample.assets {
                let image = match load_embedded_asset(asset_name) {
                    Ok(image) => image,
                    Err(problem) => {
                        eprintln!("Embedded asset problem: {}", problem);
                        problems.push(problem);
                        placeholder_image()
                    }
                };
                slides.push(Slide {
                    image,
                    source_name: (*asset_name).to_string(),
                });
            }
            collections.push(Collection {
                title: i18n.tr(sample.title_key),
                description: i18n.tr(sample.description_key),
                slides,
            });
        }

        (Self { collections }, problems)
    }
}

struct SampleCollection {
    title_key: &'static str,
    description_key: &'static str,
    assets: &'static [&'static str],
}

const SAMPLE_COLLECTIONS: &[SampleCollection] = &[
    SampleCollection {
        title_key: "collection-rings-title",
        description_key: "collection-rings-desc",
        assets: &["rings-01.svg", "rings-02.svg", "rings-03.svg"],
    },
    SampleCollection {
        title_key: "collection-necklaces-title",
        description_key: "collection-necklaces-desc",
        assets: &["necklaces-01.svg", "necklaces-02.svg", "necklaces-03.svg"],
    },
    SampleCollection {
        title_key: "collection-earrings-title",
        description_key: "collection-earrings-desc",
        assets: &["earrings-01.svg", "earrings-02.svg", "earrings-03.svg"],
    },
];

fn load_embedded_asset(name: &str) -> Result<ImageData, ContentError> {
    let file =
        ContentAsset::get(name).ok_or_else(|| ContentError::MissingAsset(name.to_string()))?;
    rasterize_svg(file.data.as_ref()).map_err(|e| ContentError::Decode(format!("{}: {}", name, e)))
}

/// A flat neutral image standing in for content that could not be decoded.
fn placeholder_image() -> ImageData {
    const W: u32 = 64;
    const H: u32 = 48;
    let pixels = [205u8, 200, 196, 255].repeat((W * H) as usize);
    ImageData::from_rgba(W, H, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_image() -> ImageData {
        ImageData::from_rgba(2, 2, vec![255; 16])
    }

    fn test_showcase() -> Showcase {
        Showcase {
            collections: vec![
                Collection {
                    title: "A".into(),
                    description: String::new(),
                    slides: vec![
                        Slide {
                            image: test_image(),
                            source_name: "a1.png".into(),
                        },
                        Slide {
                            image: test_image(),
                            source_name: "a2.png".into(),
                        },
                    ],
                },
                Collection {
                    title: "B".into(),
                    description: String::new(),
                    slides: vec![Slide {
                        image: test_image(),
                        source_name: "b1.png".into(),
                    }],
                },
            ],
        }
    }

    #[test]
    fn contains_accepts_valid_refs_and_rejects_invalid() {
        let showcase = test_showcase();
        assert!(showcase.contains(SlideRef {
            collection: 0,
            slide: 1
        }));
        assert!(showcase.contains(SlideRef {
            collection: 1,
            slide: 0
        }));
        assert!(!showcase.contains(SlideRef {
            collection: 0,
            slide: 2
        }));
        assert!(!showcase.contains(SlideRef {
            collection: 2,
            slide: 0
        }));
    }

    #[test]
    fn slide_count_per_collection() {
        let showcase = test_showcase();
        assert_eq!(showcase.slide_count(0), Some(2));
        assert_eq!(showcase.slide_count(1), Some(1));
        assert_eq!(showcase.slide_count(5), None);
    }

    #[test]
    fn replace_slide_image_swaps_image_and_name() {
        let mut showcase = test_showcase();
        let target = SlideRef {
            collection: 0,
            slide: 0,
        };

        let replaced =
            showcase.replace_slide_image(target, ImageData::from_rgba(8, 8, vec![0; 256]), "new.jpg".into());

        assert!(replaced);
        let slide = showcase.slide(target).unwrap();
        assert_eq!(slide.source_name, "new.jpg");
        assert_eq!(slide.image.width, 8);
    }

    #[test]
    fn replace_slide_image_refuses_missing_target() {
        let mut showcase = test_showcase();
        let bogus = SlideRef {
            collection: 7,
            slide: 7,
        };

        let replaced = showcase.replace_slide_image(bogus, test_image(), "new.jpg".into());
        assert!(!replaced);
    }

    #[test]
    fn embedded_showcase_has_three_collections_of_three() {
        let i18n = I18n::default();
        let (showcase, problems) = Showcase::embedded(&i18n);

        assert!(problems.is_empty(), "embedded assets should decode: {problems:?}");
        assert_eq!(showcase.collection_count(), 3);
        for collection in &showcase.collections {
            assert_eq!(collection.slides.len(), 3);
            assert!(!collection.title.starts_with("MISSING"));
            for slide in &collection.slides {
                assert!(slide.image.width > 0);
                assert!(slide.image.height > 0);
            }
        }
    }

    #[test]
    fn sample_collections_reference_distinct_assets() {
        let mut seen = std::collections::HashSet::new();
        for sample in SAMPLE_COLLECTIONS {
            for asset in sample.assets {
                assert!(seen.insert(*asset), "duplicate sample asset: {asset}");
            }
        }
    }

    #[test]
    fn placeholder_image_is_non_empty() {
        let image = placeholder_image();
        assert!(image.width > 0);
        assert!(image.height > 0);
    }
}
