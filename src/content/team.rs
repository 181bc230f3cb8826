//! Academy staff and the built-in About page team.

use crate::content::LocalizedText;
use serde::{Deserialize, Serialize};

/// A member of the academy staff shown on the About page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: LocalizedText,
    #[serde(default)]
    pub position: LocalizedText,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub bio: LocalizedText,
}

/// Team members published on the About page.
pub fn default_team() -> Vec<TeamMember> {
    vec![
        TeamMember {
            id: "1".to_string(),
            name: LocalizedText::new("Dr. Mohamed El-Sayed", "د. محمد السيد"),
            position: LocalizedText::new(
                "Academy Director - Professor of Veterinary Medicine",
                "مدير الأكاديمية - أستاذ الطب البيطري",
            ),
            image: "/images/1.jpg".to_string(),
            bio: LocalizedText::new(
                "20 years of experience in veterinary medicine and scientific research, PhD in Veterinary Surgery",
                "خبرة 20 عاماً في الطب البيطري والبحث العلمي، حاصل على دكتوراه في الجراحة البيطرية",
            ),
        },
        TeamMember {
            id: "2".to_string(),
            name: LocalizedText::new("Dr. Ahmed Mahmoud", "د. أحمد محمود"),
            position: LocalizedText::new(
                "Vice Director for Academic Affairs",
                "نائب المدير للشؤون الأكاديمية",
            ),
            image: "/images/2.jpg".to_string(),
            bio: LocalizedText::new(
                "Associate Professor in Agricultural Sciences, specialist in modern agricultural technologies",
                "أستاذ مساعد في العلوم الزراعية، متخصص في التقنيات الزراعية الحديثة",
            ),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocaleCode;

    #[test]
    fn test_default_team_is_fully_bilingual() {
        for member in default_team() {
            for locale in LocaleCode::ALL {
                assert!(!member.name.get(locale).is_empty());
                assert!(!member.position.get(locale).is_empty());
                assert!(!member.bio.get(locale).is_empty());
            }
        }
    }

    #[test]
    fn test_deserialize_team_member() {
        let member: TeamMember = serde_json::from_str(
            r#"{"id": "3", "name": {"ar": "د. سارة", "en": "Dr. Sara"}}"#,
        )
        .unwrap();
        assert_eq!(member.name.get(LocaleCode::En), "Dr. Sara");
        assert_eq!(member.bio, LocalizedText::default());
    }
}
