//! The scene document parser.
//!
//! A scene file is one top-level brace block with fixed sections. Sections
//! are handled in file order, so material and texture declarations must
//! precede the figures that reference them; resolution never waits.

use crate::material::Material;
use crate::scene::{Camera, Scene};
use crate::texture::Texture;

use super::cursor::Cursor;
use super::figure::parse_figure;
use super::value::{self, ValueError};
use super::{ParseError, ParseResult};

/// Parse a complete scene document.
pub fn parse_scene(src: &str) -> ParseResult<Scene> {
    let mut cur = Cursor::new(src);
    let mut scene = Scene::new();

    cur.skip_ws();
    cur.expect(b'{', "'{'")?;
    loop {
        cur.skip_ws();
        if cur.eat(b'}') {
            break;
        }
        let line = cur.line();
        let name = cur.quoted().ok_or(ParseError::MalformedSyntax {
            expected: "section name or '}'",
            line,
        })?;
        cur.skip_ws();
        cur.expect(b':', "':'")?;

        match name {
            "camera" => scene.camera = parse_camera(&mut cur)?,
            "materials" => parse_array(&mut cur, |cur| {
                let material = parse_material(cur)?;
                scene.materials.push(material);
                Ok(())
            })?,
            "textures" => parse_array(&mut cur, |cur| {
                let texture = parse_texture(cur)?;
                scene.textures.push(texture);
                Ok(())
            })?,
            "figures" => {
                let mut figures = Vec::new();
                parse_array(&mut cur, |cur| {
                    figures.push(parse_figure(cur, &scene)?);
                    Ok(())
                })?;
                scene.figures.append(&mut figures);
            }
            "external_object" => {
                cur.skip_ws();
                let path = value::string(&mut cur).map_err(|source| {
                    ParseError::MalformedValue {
                        field: name.to_string(),
                        line,
                        source,
                    }
                })?;
                scene.external_object = Some(path);
            }
            _ => {
                return Err(ParseError::UnknownProperty {
                    name: name.to_string(),
                    line,
                })
            }
        }

        cur.skip_ws();
        if !cur.eat(b',') && cur.peek() != Some(b'}') {
            return Err(ParseError::MalformedSyntax {
                expected: "',' or '}'",
                line: cur.line(),
            });
        }
    }

    cur.skip_ws();
    if !cur.at_end() {
        return Err(ParseError::MalformedSyntax {
            expected: "end of input",
            line: cur.line(),
        });
    }
    Ok(scene)
}

/// Parse a `[ item, item, ... ]` array, calling `item` once per element.
fn parse_array<'a>(
    cur: &mut Cursor<'a>,
    mut item: impl FnMut(&mut Cursor<'a>) -> ParseResult<()>,
) -> ParseResult<()> {
    cur.skip_ws();
    cur.expect(b'[', "'['")?;
    cur.skip_ws();
    if cur.eat(b']') {
        return Ok(());
    }
    loop {
        item(cur)?;
        cur.skip_ws();
        if cur.eat(b']') {
            return Ok(());
        }
        cur.expect(b',', "',' or ']'")?;
    }
}

fn parse_camera(cur: &mut Cursor) -> ParseResult<Camera> {
    let mut camera = Camera::default();

    cur.skip_ws();
    cur.expect(b'{', "'{'")?;
    loop {
        cur.skip_ws();
        if cur.eat(b'}') {
            return Ok(camera);
        }
        let line = cur.line();
        let name = cur.quoted().ok_or(ParseError::MalformedSyntax {
            expected: "field name or '}'",
            line,
        })?;
        cur.skip_ws();
        cur.expect(b':', "':'")?;
        cur.skip_ws();

        let value_line = cur.line();
        let wrap = |source: ValueError| ParseError::MalformedValue {
            field: name.to_string(),
            line: value_line,
            source,
        };
        match name {
            "position" => camera.position = value::vec3(cur).map_err(wrap)?,
            "angles" => camera.angles = value::vec3(cur).map_err(wrap)?,
            "fov" => camera.fov = value::scalar(cur).map_err(wrap)?,
            "exposure" => camera.exposure = value::scalar(cur).map_err(wrap)?,
            _ => {
                return Err(ParseError::UnknownProperty {
                    name: name.to_string(),
                    line,
                })
            }
        }

        cur.skip_ws();
        if !cur.eat(b',') && cur.peek() != Some(b'}') {
            return Err(ParseError::MalformedSyntax {
                expected: "',' or '}'",
                line: cur.line(),
            });
        }
    }
}

fn parse_material(cur: &mut Cursor) -> ParseResult<Material> {
    let mut material = Material::default();
    let mut named = false;

    cur.skip_ws();
    let open_line = cur.line();
    cur.expect(b'{', "'{'")?;
    loop {
        cur.skip_ws();
        if cur.eat(b'}') {
            break;
        }
        let line = cur.line();
        let name = cur.quoted().ok_or(ParseError::MalformedSyntax {
            expected: "field name or '}'",
            line,
        })?;
        cur.skip_ws();
        cur.expect(b':', "':'")?;
        cur.skip_ws();

        let value_line = cur.line();
        let wrap = |source: ValueError| ParseError::MalformedValue {
            field: name.to_string(),
            line: value_line,
            source,
        };
        match name {
            "name" => {
                material.name = value::string(cur).map_err(wrap)?;
                named = true;
            }
            "kind" => material.kind = value::material_kind(cur).map_err(wrap)?,
            "color" => material.color = value::vec3(cur).map_err(wrap)?,
            "roughness" => material.roughness = value::scalar(cur).map_err(wrap)?,
            "emission" => material.emission = value::scalar(cur).map_err(wrap)?,
            "ior" => material.ior = value::scalar(cur).map_err(wrap)?,
            _ => {
                return Err(ParseError::UnknownProperty {
                    name: name.to_string(),
                    line,
                })
            }
        }

        cur.skip_ws();
        if !cur.eat(b',') && cur.peek() != Some(b'}') {
            return Err(ParseError::MalformedSyntax {
                expected: "',' or '}'",
                line: cur.line(),
            });
        }
    }

    if !named {
        return Err(ParseError::MalformedSyntax {
            expected: "\"name\" field in material block",
            line: open_line,
        });
    }
    Ok(material)
}

fn parse_texture(cur: &mut Cursor) -> ParseResult<Texture> {
    let mut name = None;
    let mut path = None;

    cur.skip_ws();
    let open_line = cur.line();
    cur.expect(b'{', "'{'")?;
    loop {
        cur.skip_ws();
        if cur.eat(b'}') {
            break;
        }
        let line = cur.line();
        let field = cur.quoted().ok_or(ParseError::MalformedSyntax {
            expected: "field name or '}'",
            line,
        })?;
        cur.skip_ws();
        cur.expect(b':', "':'")?;
        cur.skip_ws();

        let value_line = cur.line();
        let wrap = |source: ValueError| ParseError::MalformedValue {
            field: field.to_string(),
            line: value_line,
            source,
        };
        match field {
            "name" => name = Some(value::string(cur).map_err(wrap)?),
            "path" => path = Some(value::string(cur).map_err(wrap)?),
            _ => {
                return Err(ParseError::UnknownProperty {
                    name: field.to_string(),
                    line,
                })
            }
        }

        cur.skip_ws();
        if !cur.eat(b',') && cur.peek() != Some(b'}') {
            return Err(ParseError::MalformedSyntax {
                expected: "',' or '}'",
                line: cur.line(),
            });
        }
    }

    match (name, path) {
        (Some(name), Some(path)) => Ok(Texture::new(name, path)),
        (None, _) => Err(ParseError::MalformedSyntax {
            expected: "\"name\" field in texture block",
            line: open_line,
        }),
        (_, None) => Err(ParseError::MalformedSyntax {
            expected: "\"path\" field in texture block",
            line: open_line,
        }),
    }
}
