use foundation::bounds::Aabb2;
use foundation::geo::GeoPoint;
use foundation::math::Vec2;
use scene::{
    BoundPolicy, DataVariance, DepthState, DrawableKind, GeometryContainer, ImageHandle,
    LayoutData, ShaderCache,
};
use symbology::{Alignment, Style, TextSymbol};

use crate::assets::{AssetLoader, LoaderOptions};
use crate::icon::build_icon;
use crate::resolver::resolve;
use crate::text::build_text;

/// Stable shader-generation tag for every place-label subtree.
const SHADER_TAG: &str = "annotate.PlaceLabel";

/// External collaborators a build needs: the asset loader and the
/// process-wide shader cache. Passed explicitly; there are no singletons.
pub struct BuildContext<'a> {
    pub assets: &'a dyn AssetLoader,
    pub shaders: &'a mut ShaderCache,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceError {
    /// In-place mutation attempted on a label not marked dynamic.
    IllegalStateForMutation,
}

impl std::fmt::Display for PlaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaceError::IllegalStateForMutation => {
                write!(f, "cannot patch a place label that is not dynamic")
            }
        }
    }
}

impl std::error::Error for PlaceError {}

/// A labeled map marker: an optional icon plus optional text anchored at a
/// geographic position.
///
/// After a (re)build the container holds at most one icon drawable and at
/// most one text drawable, in that order, all stamped with identical
/// layout data and rendered with an always-pass, no-write depth test.
/// Style and icon changes rebuild the whole thing; text changes patch in
/// place when the label is dynamic.
#[derive(Debug)]
pub struct PlaceLabel {
    position: GeoPoint,
    priority: f32,
    dynamic: bool,
    text: String,
    /// Explicitly supplied image; wins over anything the style resolves.
    image: Option<ImageHandle>,
    style: Style,
    loader_options: Option<LoaderOptions>,
    container: GeometryContainer,
}

impl PlaceLabel {
    pub fn new(position: GeoPoint, style: Style, ctx: &mut BuildContext<'_>) -> Self {
        Self::build(position, None, String::new(), style, None, ctx)
    }

    pub fn with_text(
        position: GeoPoint,
        text: impl Into<String>,
        style: Style,
        ctx: &mut BuildContext<'_>,
    ) -> Self {
        Self::build(position, None, text.into(), style, None, ctx)
    }

    pub fn with_image(
        position: GeoPoint,
        image: ImageHandle,
        text: impl Into<String>,
        style: Style,
        ctx: &mut BuildContext<'_>,
    ) -> Self {
        Self::build(position, Some(image), text.into(), style, None, ctx)
    }

    pub fn with_loader_options(
        position: GeoPoint,
        style: Style,
        options: LoaderOptions,
        ctx: &mut BuildContext<'_>,
    ) -> Self {
        Self::build(position, None, String::new(), style, Some(options), ctx)
    }

    pub(crate) fn build(
        position: GeoPoint,
        image: Option<ImageHandle>,
        text: String,
        style: Style,
        loader_options: Option<LoaderOptions>,
        ctx: &mut BuildContext<'_>,
    ) -> Self {
        let mut label = Self {
            position,
            priority: 0.0,
            dynamic: false,
            text,
            image,
            style,
            loader_options,
            container: GeometryContainer::new(),
        };
        label.rebuild(ctx);
        label
    }

    /// Full rebuild: resolve symbols, rebuild geometry, re-apply render
    /// state, regenerate shaders, restamp variance and layout data.
    pub fn rebuild(&mut self, ctx: &mut BuildContext<'_>) {
        tracing::debug!(text = %self.text, "rebuilding place label");
        self.container = GeometryContainer::new();

        let resolution = resolve(
            &self.style,
            &self.text,
            self.image.as_ref(),
            ctx.assets,
            self.loader_options.as_ref(),
        );
        self.text = resolution.text;

        let mut icon_box = Aabb2::zero();
        let mut icon_drawable = None;
        if let Some(spec) = resolution.icon
            && let Some(image) = &spec.image
        {
            let (drawable, bounds) = build_icon(image, spec.alignment, spec.scale, spec.heading_rad);
            icon_drawable = Some(drawable);
            icon_box = bounds;
        }

        // Text reads to the right of an icon unless the style says otherwise.
        if icon_drawable.is_some() {
            let symbol = self.style.text_or_create();
            if symbol.alignment.is_none() {
                symbol.alignment = Some(Alignment::LeftCenter);
            }
        }
        let icon_present = icon_drawable.is_some();
        let text_drawable = build_text(&self.text, self.style.text.as_ref(), icon_box, icon_present);

        // Icon first so text draws after it in any fallback z-order.
        if let Some(drawable) = icon_drawable {
            self.container.add(drawable);
        }
        if let Some(drawable) = text_drawable {
            self.container.add(drawable);
        }

        self.container.state.set_depth(DepthState::always_no_write());
        self.container.state.set_lighting_if_not_set(false);
        // Culling keys off the anchor point, not the icon+text extent.
        self.container.bound_policy = BoundPolicy::ControlPoint;

        ctx.shaders.run(&mut self.container, SHADER_TAG);

        let dynamic = self.dynamic;
        self.set_dynamic(dynamic);
        self.update_layout_data();
    }

    /// Recompute layout metadata and stamp it onto every drawable so the
    /// declutter pass reads consistent data from any of them. Idempotent.
    pub fn update_layout_data(&mut self) {
        let pixel_offset = self
            .style
            .text
            .as_ref()
            .map(TextSymbol::pixel_offset_or_default)
            .unwrap_or(Vec2::ZERO);
        let data = LayoutData::new(self.priority, pixel_offset);
        for drawable in self.container.drawables_mut() {
            drawable.layout = Some(data);
        }
    }

    pub fn set_priority(&mut self, priority: f32) {
        self.priority = priority;
        self.update_layout_data();
    }

    /// Patch the text in place. Requires the label to be dynamic; a static
    /// label is left untouched and the call reports the illegal state.
    pub fn set_text(&mut self, text: impl Into<String>) -> Result<(), PlaceError> {
        if !self.dynamic {
            tracing::warn!("ignoring text change on a place label that is not dynamic");
            return Err(PlaceError::IllegalStateForMutation);
        }

        self.text = text.into();
        let content = self.text.clone();
        let encoding = self.style.text_or_create().encoding_or_default();
        for drawable in self.container.drawables_mut() {
            if let DrawableKind::Text {
                content: existing,
                encoding: existing_encoding,
                ..
            } = &mut drawable.kind
            {
                *existing = content.clone();
                *existing_encoding = encoding;
                break;
            }
        }
        Ok(())
    }

    /// Replacing the style can change drawable topology, so this always
    /// rebuilds, dynamic or not.
    pub fn set_style(&mut self, style: Style, ctx: &mut BuildContext<'_>) {
        self.style = style;
        self.rebuild(ctx);
    }

    pub fn set_icon_image(&mut self, image: ImageHandle, ctx: &mut BuildContext<'_>) {
        self.image = Some(image);
        self.rebuild(ctx);
    }

    pub fn set_dynamic(&mut self, dynamic: bool) {
        self.dynamic = dynamic;
        let variance = if dynamic {
            DataVariance::Dynamic
        } else {
            DataVariance::Static
        };
        for drawable in self.container.drawables_mut() {
            drawable.variance = variance;
        }
    }

    pub fn position(&self) -> GeoPoint {
        self.position
    }

    pub fn priority(&self) -> f32 {
        self.priority
    }

    pub fn dynamic(&self) -> bool {
        self.dynamic
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn image(&self) -> Option<&ImageHandle> {
        self.image.as_ref()
    }

    pub fn container(&self) -> &GeometryContainer {
        &self.container
    }
}

#[cfg(test)]
mod tests {
    use super::{BuildContext, PlaceError, PlaceLabel};
    use crate::assets::{AssetError, AssetLoader, LoaderOptions, MemoryLoader, NullLoader};
    use scene::ImageHandle;
    use foundation::geo::GeoPoint;
    use foundation::math::Vec2;
    use scene::{
        BoundPolicy, DataVariance, DepthFunction, DrawableKind, Image, LayoutData, ShaderCache,
    };
    use symbology::{IconSymbol, MarkerSymbol, Style, TextSymbol};

    fn anchor() -> GeoPoint {
        GeoPoint::new(37.8, -122.4, 0.0)
    }

    fn loader_with_pin() -> MemoryLoader {
        let mut loader = MemoryLoader::new();
        loader.insert("icons/pin.png", Image::sized(16, 16));
        loader
    }

    fn icon_style() -> Style {
        Style::new().with_icon(IconSymbol::with_url("icons/pin.png"))
    }

    #[test]
    fn builds_icon_and_text_drawables_in_order() {
        let loader = loader_with_pin();
        let mut shaders = ShaderCache::new();
        let mut ctx = BuildContext {
            assets: &loader,
            shaders: &mut shaders,
        };

        let label = PlaceLabel::with_text(anchor(), "Ferry Building", icon_style(), &mut ctx);
        let drawables = label.container().drawables();
        assert_eq!(drawables.len(), 2);
        assert!(drawables[0].is_image());
        assert!(drawables[1].is_text());
        assert!(label.container().shader_program().is_some());
    }

    #[test]
    fn label_render_state_never_depth_occludes() {
        let loader = loader_with_pin();
        let mut shaders = ShaderCache::new();
        let mut ctx = BuildContext {
            assets: &loader,
            shaders: &mut shaders,
        };

        let label = PlaceLabel::with_text(anchor(), "X", icon_style(), &mut ctx);
        let state = label.container().state;
        let depth = state.depth.expect("depth state set");
        assert_eq!(depth.function, DepthFunction::Always);
        assert!(!depth.write);
        assert_eq!(state.lighting, Some(false));
        assert_eq!(label.container().bound_policy, BoundPolicy::ControlPoint);
    }

    #[test]
    fn text_falls_back_to_symbol_content() {
        let mut shaders = ShaderCache::new();
        let mut ctx = BuildContext {
            assets: &NullLoader,
            shaders: &mut shaders,
        };
        let style = Style::new().with_text(TextSymbol::with_content("Hello"));

        let label = PlaceLabel::new(anchor(), style, &mut ctx);
        assert_eq!(label.text(), "Hello");
        assert_eq!(label.container().len(), 1);
        assert!(label.container().drawables()[0].is_text());
    }

    #[test]
    fn legacy_marker_symbol_still_yields_an_icon() {
        let mut loader = MemoryLoader::new();
        loader.insert("markers/flag.png", Image::sized(8, 8));
        let mut shaders = ShaderCache::new();
        let mut ctx = BuildContext {
            assets: &loader,
            shaders: &mut shaders,
        };
        let style = Style::new().with_marker(MarkerSymbol {
            url: Some("markers/flag.png".into()),
            ..MarkerSymbol::default()
        });

        let label = PlaceLabel::new(anchor(), style, &mut ctx);
        assert_eq!(label.container().len(), 1);
        assert!(label.container().drawables()[0].is_image());
    }

    #[test]
    fn no_text_and_no_symbol_builds_an_empty_container() {
        let mut shaders = ShaderCache::new();
        let mut ctx = BuildContext {
            assets: &NullLoader,
            shaders: &mut shaders,
        };

        let label = PlaceLabel::new(anchor(), Style::new(), &mut ctx);
        assert!(label.container().is_empty());
    }

    #[test]
    fn unresolvable_icon_degrades_to_text_only() {
        let mut shaders = ShaderCache::new();
        let mut ctx = BuildContext {
            assets: &NullLoader,
            shaders: &mut shaders,
        };

        let label = PlaceLabel::with_text(anchor(), "Alcatraz", icon_style(), &mut ctx);
        assert_eq!(label.container().len(), 1);
        assert!(label.container().drawables()[0].is_text());
    }

    #[test]
    fn static_label_rejects_text_patch() {
        let loader = loader_with_pin();
        let mut shaders = ShaderCache::new();
        let mut ctx = BuildContext {
            assets: &loader,
            shaders: &mut shaders,
        };

        let mut label = PlaceLabel::with_text(anchor(), "Before", icon_style(), &mut ctx);
        let err = label.set_text("After").unwrap_err();
        assert_eq!(err, PlaceError::IllegalStateForMutation);
        assert_eq!(label.text(), "Before");
        assert_eq!(label.container().len(), 2);
        let text = label
            .container()
            .drawables()
            .iter()
            .find(|d| d.is_text())
            .expect("text drawable");
        match &text.kind {
            DrawableKind::Text { content, .. } => assert_eq!(content, "Before"),
            other => panic!("expected text drawable, got {other:?}"),
        }
    }

    #[test]
    fn dynamic_label_patches_text_in_place() {
        let loader = loader_with_pin();
        let mut shaders = ShaderCache::new();
        let mut ctx = BuildContext {
            assets: &loader,
            shaders: &mut shaders,
        };

        let mut label = PlaceLabel::with_text(anchor(), "Before", icon_style(), &mut ctx);
        label.set_dynamic(true);
        label.set_text("After").expect("dynamic patch");
        assert_eq!(label.text(), "After");
        assert_eq!(label.container().len(), 2);
        match &label.container().drawables()[1].kind {
            DrawableKind::Text { content, .. } => assert_eq!(content, "After"),
            other => panic!("expected text drawable, got {other:?}"),
        }
    }

    #[test]
    fn style_change_rebuilds_to_consistent_drawables() {
        let loader = loader_with_pin();
        let mut shaders = ShaderCache::new();
        let mut ctx = BuildContext {
            assets: &loader,
            shaders: &mut shaders,
        };

        let mut label = PlaceLabel::with_text(anchor(), "Pier 39", icon_style(), &mut ctx);
        label.set_priority(7.0);
        assert_eq!(label.container().len(), 2);

        // Drop the icon; only the text drawable should remain.
        label.set_style(Style::new(), &mut ctx);
        let drawables = label.container().drawables();
        assert_eq!(drawables.len(), 1);
        assert!(drawables[0].is_text());
        for drawable in drawables {
            assert_eq!(drawable.layout.expect("layout stamped").priority, 7.0);
        }
    }

    #[test]
    fn priority_change_updates_layout_on_every_drawable() {
        let loader = loader_with_pin();
        let mut shaders = ShaderCache::new();
        let mut ctx = BuildContext {
            assets: &loader,
            shaders: &mut shaders,
        };
        let style = icon_style().with_text(TextSymbol {
            pixel_offset: Some([5.0, -2.0]),
            ..TextSymbol::default()
        });

        let mut label = PlaceLabel::with_text(anchor(), "X", style, &mut ctx);
        label.set_priority(1.0);
        label.set_priority(2.0);

        for drawable in label.container().drawables() {
            assert_eq!(
                drawable.layout,
                Some(LayoutData::new(2.0, Vec2::new(5.0, -2.0)))
            );
        }
    }

    #[test]
    fn set_dynamic_stamps_variance_on_every_drawable() {
        let loader = loader_with_pin();
        let mut shaders = ShaderCache::new();
        let mut ctx = BuildContext {
            assets: &loader,
            shaders: &mut shaders,
        };

        let mut label = PlaceLabel::with_text(anchor(), "X", icon_style(), &mut ctx);
        for drawable in label.container().drawables() {
            assert_eq!(drawable.variance, DataVariance::Static);
        }

        label.set_dynamic(true);
        for drawable in label.container().drawables() {
            assert_eq!(drawable.variance, DataVariance::Dynamic);
        }

        // Dynamic-ness survives a full rebuild.
        label.set_icon_image(Image::sized(4, 4).into_handle(), &mut ctx);
        assert!(label.dynamic());
        for drawable in label.container().drawables() {
            assert_eq!(drawable.variance, DataVariance::Dynamic);
        }
    }

    #[test]
    fn loader_options_reach_the_asset_loader() {
        struct GatedLoader;
        impl AssetLoader for GatedLoader {
            fn resolve(
                &self,
                uri: &str,
                options: Option<&LoaderOptions>,
            ) -> Result<ImageHandle, AssetError> {
                match options.and_then(|o| o.entries.get("tier")) {
                    Some(_) => Ok(Image::sized(2, 2).into_handle()),
                    None => Err(AssetError::ResourceNotFound { uri: uri.into() }),
                }
            }
        }

        let mut shaders = ShaderCache::new();
        let mut ctx = BuildContext {
            assets: &GatedLoader,
            shaders: &mut shaders,
        };
        let mut options = LoaderOptions::new();
        options.set("tier", "premium");

        let label = PlaceLabel::with_loader_options(anchor(), icon_style(), options, &mut ctx);
        assert_eq!(label.container().len(), 1);
        assert!(label.container().drawables()[0].is_image());
    }

    #[test]
    fn explicit_image_wins_over_style_url() {
        let loader = loader_with_pin();
        let mut shaders = ShaderCache::new();
        let mut ctx = BuildContext {
            assets: &loader,
            shaders: &mut shaders,
        };
        let explicit = Image::sized(32, 32).into_handle();

        let label = PlaceLabel::with_image(anchor(), explicit, "X", icon_style(), &mut ctx);
        match &label.container().drawables()[0].kind {
            DrawableKind::ImageQuad { image, .. } => assert_eq!(image.width, 32),
            other => panic!("expected image quad, got {other:?}"),
        }
    }
}
