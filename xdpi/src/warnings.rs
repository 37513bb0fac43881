use crate::Density;
use console::style;

pub const UPSCALE_WARN_MESSAGE: &str =
    "\nQuality of your application could be seriously affected when using upscaled bitmaps !";

/// Upscale warnings collected while writing the buckets.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Warnings {
    messages: Vec<String>,
}

impl Warnings {
    pub fn upscaled(&mut self, density: Density, factor: f64) {
        self.messages.push(format!(
            "Resource for {} has been upscaled by {:.2}",
            density.dir_name(),
            factor
        ));
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// The combined message including the footer, if anything was upscaled.
    pub fn message(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        let mut lines = self.messages.clone();
        lines.push(UPSCALE_WARN_MESSAGE.to_string());
        Some(lines.join("\n"))
    }

    pub fn notify(&self) {
        if let Some(message) = self.message() {
            log::warn!("{}", message);
            eprintln!("{}", style(message).yellow());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        let warnings = Warnings::default();
        assert!(warnings.is_empty());
        assert_eq!(warnings.message(), None);
    }

    #[test]
    fn message_with_footer() {
        let mut warnings = Warnings::default();
        warnings.upscaled(Density::Hdpi, 1.5);
        warnings.upscaled(Density::Xxxhdpi, 4.0);
        assert_eq!(warnings.len(), 2);
        assert_eq!(
            warnings.message().unwrap(),
            "Resource for drawable-hdpi has been upscaled by 1.50\n\
             Resource for drawable-xxxhdpi has been upscaled by 4.00\n\
             \n\
             Quality of your application could be seriously affected when using upscaled bitmaps !"
        );
    }
}
