use crate::catalog::{Artist, PageData};
use crate::errors::StagefrontError;
use handlebars::Handlebars;
use std::path::Path;

/// Landing-page renderer backed by a handlebars registry.
///
/// The template is loaded once at startup; a missing or malformed
/// `index.hbs` fails the boot rather than the first request.
pub struct Pages {
    registry: Handlebars<'static>,
}

impl Pages {
    pub fn from_dir(templates_dir: &Path) -> Result<Self, StagefrontError> {
        let mut registry = Handlebars::new();
        registry.register_template_file("index", templates_dir.join("index.hbs"))?;
        Ok(Self { registry })
    }

    pub fn render_index(&self, artists: Vec<Artist>) -> Result<String, StagefrontError> {
        Ok(self.registry.render("index", &PageData { artists })?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artist(name: &str) -> Artist {
        Artist {
            id: 1,
            image: "https://example.com/a.jpg".into(),
            name: name.into(),
            members: vec!["a".into(), "b".into()],
            creation_date: 1970,
            first_album: "14-12-1973".into(),
        }
    }

    #[test]
    fn renders_artists_into_template() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("index.hbs"),
            "{{#each artists}}<h2>{{name}}</h2>{{/each}}",
        )
        .unwrap();

        let pages = Pages::from_dir(dir.path()).expect("load pages");
        let html = pages
            .render_index(vec![artist("Queen"), artist("Muse")])
            .expect("render");

        assert_eq!(html, "<h2>Queen</h2><h2>Muse</h2>");
    }

    #[test]
    fn missing_template_fails_at_startup() {
        let dir = tempfile::tempdir().unwrap();

        assert!(matches!(
            Pages::from_dir(dir.path()),
            Err(StagefrontError::Template(_))
        ));
    }
}
