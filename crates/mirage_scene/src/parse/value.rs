//! Typed value sub-parsers for field literals.
//!
//! Each parser consumes one value literal, advancing the cursor past it.
//! Failures come back as a [`ValueError`]; the calling field loop wraps
//! them with the field name and line into `ParseError::MalformedValue`.

use mirage_math::Vec3;
use thiserror::Error;

use crate::figure::FigureKind;
use crate::material::MaterialKind;
use crate::scene::{MaterialId, Scene, TextureId};

use super::cursor::Cursor;

/// Why a value literal was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    #[error("expected a number")]
    ExpectedNumber,

    #[error("bad numeric literal \"{0}\"")]
    BadNumber(String),

    #[error("expected a 3-component vector")]
    BadVector,

    #[error("expected a quoted name")]
    ExpectedName,

    #[error("unknown figure type \"{0}\"")]
    UnknownKind(String),

    #[error("unknown material kind \"{0}\"")]
    UnknownMaterialKind(String),

    #[error("unresolved material \"{0}\"")]
    UnknownMaterial(String),

    #[error("unresolved texture \"{0}\"")]
    UnknownTexture(String),
}

/// Parse a float literal.
pub fn scalar(cur: &mut Cursor) -> Result<f32, ValueError> {
    cur.skip_ws();
    let token = cur.number();
    if token.is_empty() {
        return Err(ValueError::ExpectedNumber);
    }
    token
        .parse::<f32>()
        .map_err(|_| ValueError::BadNumber(token.to_string()))
}

/// Parse a `[x, y, z]` vector literal with exactly three components.
pub fn vec3(cur: &mut Cursor) -> Result<Vec3, ValueError> {
    cur.skip_ws();
    if !cur.eat(b'[') {
        return Err(ValueError::BadVector);
    }
    let x = scalar(cur)?;
    cur.skip_ws();
    if !cur.eat(b',') {
        return Err(ValueError::BadVector);
    }
    let y = scalar(cur)?;
    cur.skip_ws();
    if !cur.eat(b',') {
        return Err(ValueError::BadVector);
    }
    let z = scalar(cur)?;
    cur.skip_ws();
    if !cur.eat(b']') {
        return Err(ValueError::BadVector);
    }
    Ok(Vec3::new(x, y, z))
}

/// Parse a quoted string value.
pub fn string(cur: &mut Cursor) -> Result<String, ValueError> {
    quoted(cur).map(str::to_string)
}

/// Parse a quoted figure-type name.
pub fn figure_kind(cur: &mut Cursor) -> Result<FigureKind, ValueError> {
    let name = quoted(cur)?;
    FigureKind::from_name(name).ok_or_else(|| ValueError::UnknownKind(name.to_string()))
}

/// Parse a quoted material-kind name.
pub fn material_kind(cur: &mut Cursor) -> Result<MaterialKind, ValueError> {
    let name = quoted(cur)?;
    MaterialKind::from_name(name).ok_or_else(|| ValueError::UnknownMaterialKind(name.to_string()))
}

/// Parse a quoted material name and resolve it against the scene.
///
/// Resolution is immediate: only materials already registered in `scene`
/// can be referenced.
pub fn material_ref(cur: &mut Cursor, scene: &Scene) -> Result<MaterialId, ValueError> {
    let name = quoted(cur)?;
    scene
        .find_material(name)
        .ok_or_else(|| ValueError::UnknownMaterial(name.to_string()))
}

/// Parse a quoted texture name and resolve it against the scene.
pub fn texture_ref(cur: &mut Cursor, scene: &Scene) -> Result<TextureId, ValueError> {
    let name = quoted(cur)?;
    scene
        .find_texture(name)
        .ok_or_else(|| ValueError::UnknownTexture(name.to_string()))
}

fn quoted<'a>(cur: &mut Cursor<'a>) -> Result<&'a str, ValueError> {
    cur.skip_ws();
    cur.quoted().ok_or(ValueError::ExpectedName)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Material;
    use crate::texture::Texture;

    #[test]
    fn test_scalar_literals() {
        assert_eq!(scalar(&mut Cursor::new("1.5")), Ok(1.5));
        assert_eq!(scalar(&mut Cursor::new("  -2")), Ok(-2.0));
        assert_eq!(scalar(&mut Cursor::new("1e2")), Ok(100.0));
        assert_eq!(scalar(&mut Cursor::new("\"abc\"")), Err(ValueError::ExpectedNumber));
        assert_eq!(
            scalar(&mut Cursor::new("1.5.2")),
            Err(ValueError::BadNumber("1.5.2".into()))
        );
    }

    #[test]
    fn test_vec3_literals() {
        assert_eq!(
            vec3(&mut Cursor::new("[1, 2, 3]")),
            Ok(Vec3::new(1.0, 2.0, 3.0))
        );
        assert_eq!(
            vec3(&mut Cursor::new("[ -1.5,0 ,2.5 ]")),
            Ok(Vec3::new(-1.5, 0.0, 2.5))
        );
    }

    #[test]
    fn test_vec3_arity_is_checked() {
        assert_eq!(vec3(&mut Cursor::new("[1, 2]")), Err(ValueError::BadVector));
        assert_eq!(vec3(&mut Cursor::new("[1, 2, 3, 4]")), Err(ValueError::BadVector));
        assert_eq!(vec3(&mut Cursor::new("1, 2, 3")), Err(ValueError::BadVector));
    }

    #[test]
    fn test_figure_kind_names() {
        assert_eq!(
            figure_kind(&mut Cursor::new("\"sphere\"")),
            Ok(FigureKind::Sphere)
        );
        assert_eq!(
            figure_kind(&mut Cursor::new("\"julia_fract\"")),
            Ok(FigureKind::Julia)
        );
        assert_eq!(
            figure_kind(&mut Cursor::new("\"blob\"")),
            Err(ValueError::UnknownKind("blob".into()))
        );
        assert_eq!(
            figure_kind(&mut Cursor::new("sphere")),
            Err(ValueError::ExpectedName)
        );
    }

    #[test]
    fn test_reference_resolution() {
        let mut scene = Scene::new();
        scene.materials.push(Material::new("steel", MaterialKind::Reflect));
        scene.textures.push(Texture::new("wood", "wood.png"));

        assert_eq!(
            material_ref(&mut Cursor::new("\"steel\""), &scene),
            Ok(MaterialId(0))
        );
        assert_eq!(
            material_ref(&mut Cursor::new("\"gold\""), &scene),
            Err(ValueError::UnknownMaterial("gold".into()))
        );
        assert_eq!(
            texture_ref(&mut Cursor::new("\"wood\""), &scene),
            Ok(TextureId(0))
        );
        assert_eq!(
            texture_ref(&mut Cursor::new("\"marble\""), &scene),
            Err(ValueError::UnknownTexture("marble".into()))
        );
    }
}
