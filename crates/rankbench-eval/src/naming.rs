use rankbench_imgproc::filter::FilterKind;

/// The parsed identity of a noisy file name.
///
/// A noisy file is named `<base><sep><noise params>.<ext>`, e.g.
/// `gray_SP_lvl1.jpg`: base image `gray`, noise descriptor `SP_lvl1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoisyName {
    /// The base image identity (first token), e.g. `color` or `gray`.
    pub base: String,
    /// The noise descriptor (everything after the first separator).
    pub noise_params: String,
    /// The full file stem, without the extension.
    pub stem: String,
    /// The file extension, without the leading dot.
    pub extension: String,
}

/// The file naming convention of the study.
///
/// The convention is configuration, not an algorithm: the separator and the
/// grayscale marker token can be changed without touching the pipeline.
#[derive(Debug, Clone)]
pub struct NamingScheme {
    /// The token separator inside file stems.
    pub separator: char,
    /// The base token marking a grayscale image pair.
    pub gray_token: String,
}

impl Default for NamingScheme {
    fn default() -> Self {
        Self {
            separator: '_',
            gray_token: String::from("gray"),
        }
    }
}

impl NamingScheme {
    /// Parse a noisy file name into its identity parts.
    ///
    /// Returns `None` if the name does not follow the convention.
    pub fn parse(&self, file_name: &str) -> Option<NoisyName> {
        let (stem, extension) = file_name.rsplit_once('.')?;
        let (base, noise_params) = stem.split_once(self.separator)?;
        if base.is_empty() || noise_params.is_empty() || extension.is_empty() {
            return None;
        }

        Some(NoisyName {
            base: base.to_string(),
            noise_params: noise_params.to_string(),
            stem: stem.to_string(),
            extension: extension.to_string(),
        })
    }

    /// The file name of the clean reference for a base identity.
    pub fn reference_name(&self, base: &str, extension: &str) -> String {
        format!("{base}.{extension}")
    }

    /// The file name of a synthesized noisy variant.
    pub fn noisy_name(&self, base: &str, noise_type: &str, level: &str, extension: &str) -> String {
        let sep = self.separator;
        format!("{base}{sep}{noise_type}{sep}{level}.{extension}")
    }

    /// The file name of a filtered output, derived from the noisy stem.
    pub fn filtered_name(&self, stem: &str, kind: FilterKind, extension: &str) -> String {
        let sep = self.separator;
        format!("{stem}{sep}{kind}.{extension}")
    }

    /// Whether a base identity denotes a grayscale image pair.
    pub fn is_grayscale(&self, base: &str) -> bool {
        base.contains(self.gray_token.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_noisy_name() {
        let naming = NamingScheme::default();
        let name = naming.parse("gray_SP_lvl1.jpg").unwrap();
        assert_eq!(name.base, "gray");
        assert_eq!(name.noise_params, "SP_lvl1");
        assert_eq!(name.stem, "gray_SP_lvl1");
        assert_eq!(name.extension, "jpg");
        assert!(naming.is_grayscale(&name.base));
    }

    #[test]
    fn parse_rejects_unconventional_names() {
        let naming = NamingScheme::default();
        assert!(naming.parse("reference.jpg").is_none());
        assert!(naming.parse("no_extension").is_none());
        assert!(naming.parse("_SP_lvl1.jpg").is_none());
    }

    #[test]
    fn derived_names() {
        let naming = NamingScheme::default();
        assert_eq!(naming.reference_name("color", "jpg"), "color.jpg");
        assert_eq!(
            naming.noisy_name("color", "Gauss", "lvl2", "jpg"),
            "color_Gauss_lvl2.jpg"
        );
        assert_eq!(
            naming.filtered_name("gray_SP_lvl1", FilterKind::Median, "jpg"),
            "gray_SP_lvl1_median.jpg"
        );
        assert!(!naming.is_grayscale("color"));
    }

    #[test]
    fn custom_separator() {
        let naming = NamingScheme {
            separator: '-',
            ..Default::default()
        };
        let name = naming.parse("color-SP-lvl1.png").unwrap();
        assert_eq!(name.base, "color");
        assert_eq!(name.noise_params, "SP-lvl1");
    }
}
