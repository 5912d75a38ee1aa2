use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CmsContent {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_image: String,
    pub about_text: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub whatsapp: String,
}

/// Partial update; absent fields keep their current value.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CmsUpdate {
    pub hero_title: Option<String>,
    pub hero_subtitle: Option<String>,
    pub hero_image: Option<String>,
    pub about_text: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub whatsapp: Option<String>,
}

impl CmsContent {
    pub fn apply(&mut self, update: CmsUpdate) {
        let fields = [
            (&mut self.hero_title, update.hero_title),
            (&mut self.hero_subtitle, update.hero_subtitle),
            (&mut self.hero_image, update.hero_image),
            (&mut self.about_text, update.about_text),
            (&mut self.contact_email, update.contact_email),
            (&mut self.contact_phone, update.contact_phone),
            (&mut self.whatsapp, update.whatsapp),
        ];

        for (field, value) in fields {
            if let Some(value) = value {
                *field = value;
            }
        }
    }
}
