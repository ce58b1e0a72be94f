// Thu Jan 22 2026 - Alex

use colored::*;

pub struct Banner {
    title: String,
    subtitle: Option<String>,
    version: Option<String>,
    width: usize,
}

impl Banner {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            subtitle: None,
            version: None,
            width: 52,
        }
    }

    pub fn with_subtitle(mut self, subtitle: &str) -> Self {
        self.subtitle = Some(subtitle.to_string());
        self
    }

    pub fn with_version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn render(&self) -> String {
        let inner = self.width - 4;
        let h_line = "─".repeat(inner + 2);
        let mut lines = Vec::new();

        lines.push(format!("┌{}┐", h_line));
        lines.push(format!(
            "│ {} │",
            format!("{:^width$}", self.title, width = inner).cyan().bold()
        ));

        if let Some(subtitle) = &self.subtitle {
            lines.push(format!(
                "│ {} │",
                format!("{:^width$}", subtitle, width = inner)
            ));
        }

        if let Some(version) = &self.version {
            lines.push(format!(
                "│ {} │",
                format!("{:^width$}", format!("v{}", version), width = inner).green()
            ));
        }

        lines.push(format!("└{}┘", h_line));
        lines.join("\n")
    }

    pub fn print(&self) {
        println!("{}", self.render());
    }

    pub fn print_default() {
        Banner::new("IP Region Sampler")
            .with_subtitle("Geolocation Summary Generator")
            .with_version("1.0.0")
            .print();
    }
}

impl Default for Banner {
    fn default() -> Self {
        Self::new("IP Region Sampler")
            .with_subtitle("Geolocation Summary Generator")
            .with_version("1.0.0")
    }
}
