//! The figure body parser: a named-field extraction loop.

use crate::figure::Figure;
use crate::scene::Scene;

use super::cursor::Cursor;
use super::field::figure_fields;
use super::{ParseError, ParseResult};

/// Parse one `{ "name": value, ... }` figure block into a fresh record.
pub fn parse_figure(cur: &mut Cursor, scene: &Scene) -> ParseResult<Figure> {
    let mut figure = Figure::default();
    parse_figure_into(cur, &mut figure, scene)?;
    Ok(figure)
}

/// Parse a figure block into an existing record.
///
/// The cursor must sit at the opening `{`. Fields not named in the block
/// keep whatever `figure` already holds. A field repeated within one block
/// is written each time it appears, so the last occurrence wins; the table
/// does no duplicate tracking.
///
/// Any error aborts the block immediately: there is no resynchronization,
/// and `figure` may be left partially updated.
pub fn parse_figure_into(
    cur: &mut Cursor,
    figure: &mut Figure,
    scene: &Scene,
) -> ParseResult<()> {
    let table = figure_fields();

    cur.skip_ws();
    cur.expect(b'{', "'{'")?;
    loop {
        cur.skip_ws();
        if cur.eat(b'}') {
            return Ok(());
        }
        let line = cur.line();
        let name = cur.quoted().ok_or(ParseError::MalformedSyntax {
            expected: "field name or '}'",
            line,
        })?;
        cur.skip_ws();
        cur.expect(b':', "':'")?;

        let descriptor = table.lookup(name).ok_or_else(|| ParseError::UnknownProperty {
            name: name.to_string(),
            line,
        })?;

        cur.skip_ws();
        let value_line = cur.line();
        descriptor
            .slot
            .parse_into(cur, figure, scene)
            .map_err(|source| ParseError::MalformedValue {
                field: name.to_string(),
                line: value_line,
                source,
            })?;

        cur.skip_ws();
        if !cur.eat(b',') && cur.peek() != Some(b'}') {
            return Err(ParseError::MalformedSyntax {
                expected: "',' or '}'",
                line: cur.line(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::FigureKind;
    use crate::material::{Material, MaterialKind};
    use crate::parse::ValueError;
    use crate::scene::{MaterialId, TextureId};
    use crate::texture::Texture;
    use mirage_math::Vec3;

    fn test_scene() -> Scene {
        let mut scene = Scene::new();
        scene.materials.push(Material::new("steel", MaterialKind::Reflect));
        scene.textures.push(Texture::new("wood", "textures/wood.png"));
        scene
    }

    fn parse(input: &str, scene: &Scene) -> ParseResult<Figure> {
        parse_figure(&mut Cursor::new(input), scene)
    }

    #[test]
    fn test_empty_block_yields_default_figure() {
        let scene = Scene::new();
        let fig = parse("{}", &scene).unwrap();
        assert_eq!(fig, Figure::default());

        let fig = parse("  {\n}  ", &scene).unwrap();
        assert_eq!(fig, Figure::default());
    }

    /// Every table entry, fed a valid literal, writes exactly its own slot.
    #[test]
    fn test_each_field_sets_only_its_slot() {
        // (field name, literal, field of the record expected to change)
        let cases = [
            ("type", "\"cone\"", "kind"),
            ("center", "[1, 2, 3]", "position"),
            ("center2", "[1, 2, 3]", "axis"),
            ("normal", "[1, 2, 3]", "axis"),
            ("emission", "[1, 2, 3]", "emission"),
            ("radius", "1.5", "radius"),
            ("angle", "30", "radius"),
            ("color", "[1, 2, 3]", "color"),
            ("material", "\"steel\"", "material"),
            ("radius2", "0.5", "radius2"),
            ("specular", "0.25", "specular"),
            ("texture", "\"wood\"", "texture"),
            ("scale", "2", "scale"),
            ("center3", "[1, 2, 3]", "axis2"),
        ];
        let scene = test_scene();
        for (field, literal, slot) in cases {
            let fig = parse(&format!("{{\"{field}\": {literal}}}"), &scene)
                .unwrap_or_else(|e| panic!("field {field}: {e}"));
            let changed = changed_fields(&fig);
            assert_eq!(changed, vec![slot], "field {field}");
        }
    }

    fn changed_fields(fig: &Figure) -> Vec<&'static str> {
        let base = Figure::default();
        let mut changed = Vec::new();
        if fig.kind != base.kind {
            changed.push("kind");
        }
        if fig.position != base.position {
            changed.push("position");
        }
        if fig.axis != base.axis {
            changed.push("axis");
        }
        if fig.axis2 != base.axis2 {
            changed.push("axis2");
        }
        if fig.emission != base.emission {
            changed.push("emission");
        }
        if fig.color != base.color {
            changed.push("color");
        }
        if fig.radius != base.radius {
            changed.push("radius");
        }
        if fig.radius2 != base.radius2 {
            changed.push("radius2");
        }
        if fig.specular != base.specular {
            changed.push("specular");
        }
        if fig.scale != base.scale {
            changed.push("scale");
        }
        if fig.material != base.material {
            changed.push("material");
        }
        if fig.texture != base.texture {
            changed.push("texture");
        }
        changed
    }

    #[test]
    fn test_full_block() {
        let scene = test_scene();
        let fig = parse(
            r#"{
                "type": "cylinder",
                "center": [0, -1, 4],
                "center2": [0, 3, 4],
                "radius": 1.2,
                "color": [0.9, 0.2, 0.2],
                "material": "steel",
                "texture": "wood",
                "specular": 0.7
            }"#,
            &scene,
        )
        .unwrap();

        assert_eq!(fig.kind, FigureKind::Cylinder);
        assert_eq!(fig.position, Vec3::new(0.0, -1.0, 4.0));
        assert_eq!(fig.axis, Vec3::new(0.0, 3.0, 4.0));
        assert_eq!(fig.radius, 1.2);
        assert_eq!(fig.material, Some(MaterialId(0)));
        assert_eq!(fig.texture, Some(TextureId(0)));
        assert_eq!(fig.specular, 0.7);
        // Untouched slots keep their defaults.
        assert_eq!(fig.radius2, 0.0);
        assert_eq!(fig.emission, Vec3::ZERO);
    }

    #[test]
    fn test_unknown_property() {
        let scene = Scene::new();
        let err = parse("{\"foo\": 1}", &scene).unwrap_err();
        match err {
            ParseError::UnknownProperty { name, line } => {
                assert_eq!(name, "foo");
                assert_eq!(line, 1);
            }
            other => panic!("expected UnknownProperty, got {other}"),
        }
    }

    #[test]
    fn test_malformed_value() {
        let scene = Scene::new();
        let err = parse("{\"radius\": \"abc\"}", &scene).unwrap_err();
        match err {
            ParseError::MalformedValue { field, source, .. } => {
                assert_eq!(field, "radius");
                assert_eq!(source, ValueError::ExpectedNumber);
            }
            other => panic!("expected MalformedValue, got {other}"),
        }
    }

    #[test]
    fn test_unresolved_material_is_a_value_error() {
        let scene = Scene::new();
        let err = parse("{\"material\": \"steel\"}", &scene).unwrap_err();
        assert!(matches!(
            err,
            ParseError::MalformedValue { source: ValueError::UnknownMaterial(_), .. }
        ));
    }

    #[test]
    fn test_missing_close_brace() {
        let scene = Scene::new();
        let err = parse("{\"type\": \"sphere\"", &scene).unwrap_err();
        assert!(matches!(err, ParseError::MalformedSyntax { .. }));

        let err = parse("{", &scene).unwrap_err();
        assert!(matches!(err, ParseError::MalformedSyntax { .. }));
    }

    #[test]
    fn test_missing_separator() {
        let scene = Scene::new();
        let err = parse("{\"radius\": 1 \"scale\": 2}", &scene).unwrap_err();
        assert!(matches!(
            err,
            ParseError::MalformedSyntax { expected: "',' or '}'", .. }
        ));
    }

    /// Repeating a field overwrites the earlier value. This documents the
    /// observed behavior; it is not a guarantee.
    #[test]
    fn test_duplicate_field_last_write_wins() {
        let scene = Scene::new();
        let fig = parse("{\"radius\": 1.0, \"radius\": 2.0}", &scene).unwrap();
        assert_eq!(fig.radius, 2.0);
    }

    #[test]
    fn test_error_lines_point_at_the_problem() {
        let scene = Scene::new();
        let err = parse("{\n  \"radius\": 1,\n  \"foo\": 2\n}", &scene).unwrap_err();
        match err {
            ParseError::UnknownProperty { line, .. } => assert_eq!(line, 3),
            other => panic!("expected UnknownProperty, got {other}"),
        }
    }

    #[test]
    fn test_parse_into_preserves_existing_fields() {
        let scene = Scene::new();
        let mut fig = Figure {
            radius: 9.0,
            ..Figure::default()
        };
        parse_figure_into(&mut Cursor::new("{\"scale\": 2}"), &mut fig, &scene).unwrap();
        assert_eq!(fig.radius, 9.0);
        assert_eq!(fig.scale, 2.0);
    }
}
