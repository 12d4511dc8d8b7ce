use detail_catalog::DetailTile;
use std::io::{self, Write};

pub fn write_listing<W: Write>(out: &mut W, heading: &str, tiles: &[DetailTile]) -> io::Result<()> {
    writeln!(out, "{heading}")?;
    if tiles.is_empty() {
        writeln!(out, "  (no details)")?;
        return Ok(());
    }

    for tile in tiles {
        writeln!(
            out,
            "  {} / {} / {} [{}] -> {}",
            tile.brand_name, tile.product_name, tile.detail_name, tile.abbrev, tile.embed_url
        )?;
    }
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, tiles: &[DetailTile]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, tiles)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(abbrev: &str) -> DetailTile {
        DetailTile {
            logo_alt: "Acme".to_string(),
            logo_src: None,
            image_alt: abbrev.to_uppercase(),
            image_src: format!("{abbrev}.png"),
            detail_name: abbrev.to_uppercase(),
            product_name: "P1".to_string(),
            brand_name: "B1".to_string(),
            abbrev: abbrev.to_string(),
            embed_url: format!("https://workingspec.me/embed/{abbrev}"),
        }
    }

    #[test]
    fn listing_has_one_line_per_tile() -> io::Result<()> {
        let mut out = Vec::new();
        write_listing(&mut out, "Acme Details", &[tile("d1"), tile("d2")])?;

        let text = String::from_utf8_lossy(&out);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Acme Details",
                "  B1 / P1 / D1 [d1] -> https://workingspec.me/embed/d1",
                "  B1 / P1 / D2 [d2] -> https://workingspec.me/embed/d2",
            ]
        );
        Ok(())
    }

    #[test]
    fn empty_listing_says_so() -> io::Result<()> {
        let mut out = Vec::new();
        write_listing(&mut out, "Acme Details", &[])?;

        assert_eq!(String::from_utf8_lossy(&out), "Acme Details\n  (no details)\n");
        Ok(())
    }

    #[test]
    fn json_uses_camel_case_keys() -> Result<(), Box<dyn std::error::Error>> {
        let mut out = Vec::new();
        write_json(&mut out, &[tile("d1")])?;

        let value: serde_json::Value = serde_json::from_slice(&out)?;
        assert_eq!(value[0]["embedUrl"], "https://workingspec.me/embed/d1");
        assert_eq!(value[0]["brandName"], "B1");
        assert!(value[0]["logoSrc"].is_null());
        Ok(())
    }
}
