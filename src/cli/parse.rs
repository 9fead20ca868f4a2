use mazegraph_core::bail_invalid;
use mazegraph_core::error::Result;
use mazegraph_core::format::OutputFormat;
use mazegraph_core::Juncture;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse a juncture written as `x,y`
pub fn parse_juncture(s: &str) -> std::result::Result<Juncture, String> {
    juncture_from_str(s).map_err(|e| e.to_string())
}

fn juncture_from_str(s: &str) -> Result<Juncture> {
    let Some((x, y)) = s.split_once(',') else {
        bail_invalid!("juncture (expected x,y)", s);
    };
    let x = x.trim().parse::<u32>();
    let y = y.trim().parse::<u32>();
    match (x, y) {
        (Ok(x), Ok(y)) => Ok(Juncture::new(x, y)),
        _ => bail_invalid!("juncture (expected x,y)", s),
    }
}
