//! `ReefAngel_Features.h` rendering.

use super::banner::{render_preamble, Banner};

pub const FEATURES_GUARD: &str = "__REEFANGEL_FEATURES_H__";

/// Render with a banner stamped now.
pub fn render_features<'a>(
    defines: impl IntoIterator<Item = &'a str>,
    source_filename: &str,
) -> String {
    render_features_with_banner(defines, &Banner::now(source_filename))
}

pub fn render_features_with_banner<'a>(
    defines: impl IntoIterator<Item = &'a str>,
    banner: &Banner,
) -> String {
    let mut out = render_preamble(banner);
    out.push_str(&format!("#ifndef {0}\n#define {0}\n\n", FEATURES_GUARD));
    for define in defines {
        out.push_str(&format!("#define {}\n", define));
    }
    out.push('\n');
    out.push_str(&format!("\n#endif  // {}\n", FEATURES_GUARD));
    out
}

/// Read the feature defines back out of a rendered header, in order. The
/// include guard is not a feature and is skipped.
pub fn parse_feature_defines(header: &str) -> Vec<String> {
    header
        .lines()
        .filter_map(|line| line.strip_prefix("#define "))
        .filter(|define| *define != FEATURES_GUARD)
        .map(str::to_string)
        .collect()
}
