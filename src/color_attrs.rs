use crate::foundation::core::Rgba;
use crate::foundation::error::{OverlyteError, OverlyteResult};

/// Maximum number of entries the hardware-blend color table holds.
pub const MAX_BG_CLR: usize = 20;

/// Compiled-in hardware-blend color table used when none is configured.
pub const DEFAULT_COLOR_ATTRS: &str =
    "0,0.0,1.0,0.0,0.3:1,0.0,1.0,1.0,0.3:2,0.0,0.0,1.0,0.3:3,1.0,1.0,0.0,0.3";

/// Configured mapping from a detection class id to a hardware-blend color.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ClassColorEntry {
    /// Detection class id, always `< MAX_BG_CLR`.
    pub class_id: u32,
    /// Background color composited for boxes of this class.
    pub color: Rgba,
}

/// Parse a `id,r,g,b,a:id,r,g,b,a:...` color-attribute string.
///
/// Entries beyond [`MAX_BG_CLR`] are dropped with a diagnostic. A class id at
/// or above [`MAX_BG_CLR`], or any malformed quintuple, rejects the whole
/// string with [`OverlyteError::Configuration`]: bad static configuration
/// fails loudly rather than storing a partial table.
pub fn parse_color_attrs(attrs: &str) -> OverlyteResult<Vec<ClassColorEntry>> {
    let mut entries = Vec::new();

    for chunk in attrs.split(':').filter(|c| !c.is_empty()) {
        if entries.len() == MAX_BG_CLR {
            tracing::warn!(
                max = MAX_BG_CLR,
                "color attribute entries exceed table capacity, truncating"
            );
            break;
        }

        let mut fields = chunk.split(',');
        let class_id = parse_field::<u32>(chunk, fields.next())?;
        if class_id as usize >= MAX_BG_CLR {
            return Err(OverlyteError::configuration(format!(
                "class id {class_id} exceeds maximum {MAX_BG_CLR}"
            )));
        }

        let red = parse_channel(chunk, fields.next())?;
        let green = parse_channel(chunk, fields.next())?;
        let blue = parse_channel(chunk, fields.next())?;
        let alpha = parse_channel(chunk, fields.next())?;
        if fields.next().is_some() {
            return Err(malformed(chunk));
        }

        entries.push(ClassColorEntry {
            class_id,
            color: Rgba::new(red, green, blue, alpha),
        });
    }

    Ok(entries)
}

/// Serialize entries back to the attribute-string form.
///
/// Every entry appears exactly once, `:`-separated, with no trailing
/// separator. Round-trips through [`parse_color_attrs`] for any table whose
/// ids are in range.
pub fn format_color_attrs(entries: &[ClassColorEntry]) -> String {
    entries
        .iter()
        .map(|e| {
            format!(
                "{},{},{},{},{}",
                e.class_id, e.color.red, e.color.green, e.color.blue, e.color.alpha
            )
        })
        .collect::<Vec<_>>()
        .join(":")
}

fn parse_field<T: std::str::FromStr>(chunk: &str, field: Option<&str>) -> OverlyteResult<T> {
    field
        .and_then(|f| f.trim().parse().ok())
        .ok_or_else(|| malformed(chunk))
}

fn parse_channel(chunk: &str, field: Option<&str>) -> OverlyteResult<f32> {
    let value: f32 = parse_field(chunk, field)?;
    if !(0.0..=1.0).contains(&value) {
        return Err(OverlyteError::configuration(format!(
            "color channel {value} outside [0, 1] in entry {chunk:?}"
        )));
    }
    Ok(value)
}

fn malformed(chunk: &str) -> OverlyteError {
    OverlyteError::configuration(format!(
        "color attribute entry {chunk:?} must be id,r,g,b,a"
    ))
}

#[cfg(test)]
#[path = "../tests/unit/color_attrs.rs"]
mod tests;
