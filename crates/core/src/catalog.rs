//! Fixed IC38 chapter catalog.

use crate::model::{Chapter, ChapterId, Section};

const MOCK_TITLE: &str = "संपूर्ण पाठ्यक्रम मॉक टेस्ट (Full Mock Test)";
const MOCK_DESCRIPTION: &str =
    "सभी 21 अध्यायों से 30 मिश्रित प्रश्नों के साथ वास्तविक परीक्षा का अभ्यास करें।";

const CHAPTERS: [(u32, &str, Section, &str); 21] = [
    (1, "बीमा का परिचय", Section::Common, "जोखिम और बीमा तंत्र की मूल बातें।"),
    (2, "ग्राहक सेवा", Section::Common, "बीमा उद्योग में सेवा का महत्व।"),
    (3, "शिकायत निवारण तंत्र", Section::Common, "उपभोक्ता संरक्षण और लोकपाल योजनाएं।"),
    (4, "बीमा एजेंटों के नियामक पहलू", Section::Common, "IRDAI नियम और आचार संहिता।"),
    (5, "बीमा अनुबंध के कानूनी सिद्धांत", Section::Common, "परम सद्भाव, बीमा योग्य हित, आदि।"),
    (6, "जीवन बीमा में क्या शामिल है", Section::Life, "मानव जीवन मूल्य और प्रीमियम की अवधारणा।"),
    (7, "वित्तीय योजना", Section::Life, "वित्तीय लक्ष्यों में बीमा की भूमिका।"),
    (8, "जीवन बीमा उत्पाद – I", Section::Life, "पारंपरिक उत्पाद: टर्म, बंदोबस्ती (Endowment), आजीवन (Whole Life)।"),
    (9, "जीवन बीमा उत्पाद – II", Section::Life, "ULIP और अन्य आधुनिक उत्पाद।"),
    (10, "जीवन बीमा के अनुप्रयोग", Section::Life, "MWP अधिनियम, कीमैन बीमा।"),
    (11, "जीवन बीमा में मूल्य निर्धारण और मूल्यांकन", Section::Life, "प्रीमियम गणना और अधिशेष (Surplus)।"),
    (12, "दस्तावेज़ीकरण – प्रस्ताव चरण", Section::Life, "प्रस्ताव फॉर्म और केवाईसी (KYC)।"),
    (13, "दस्तावेज़ीकरण – पॉलिसी शर्तें - I", Section::Life, "प्रथम प्रीमियम रसीद और पॉलिसी दस्तावेज़।"),
    (14, "दस्तावेज़ीकरण – पॉलिसी शर्तें - II", Section::Life, "अनुग्रह अवधि, व्यपगमन (Lapse) और पुनरुद्धार (Revival)।"),
    (15, "हामीदारी (Underwriting)", Section::Life, "जोखिम मूल्यांकन और वर्गीकरण।"),
    (16, "जीवन बीमा पॉलिसी के तहत भुगतान", Section::Life, "दावे: परिपक्वता, मृत्यु और समर्पण।"),
    (17, "स्वास्थ्य बीमा का परिचय", Section::Health, "स्वास्थ्य सेवा प्रणाली और बीमा का विकास।"),
    (18, "बीमा दस्तावेज़ीकरण", Section::Health, "स्वास्थ्य प्रस्तावों के लिए विशिष्टताएँ।"),
    (19, "स्वास्थ्य बीमा उत्पाद", Section::Health, "मेडिक्लेम, गंभीर बीमारी, आदि।"),
    (20, "स्वास्थ्य बीमा हामीदारी", Section::Health, "रग्णता जोखिम और पहले से मौजूद बीमारियां।"),
    (21, "स्वास्थ्य बीमा दावे", Section::Health, "कैशलेस और प्रतिपूर्ति प्रक्रियाएं।"),
];

/// Chapters of one section, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionGroup<'a> {
    pub section: Section,
    pub chapters: Vec<&'a Chapter>,
}

/// Read-only chapter catalog plus the synthetic mock chapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    chapters: Vec<Chapter>,
    mock: Chapter,
}

impl Catalog {
    /// The IC38 insurance-agent syllabus: 21 chapters across three sections.
    #[must_use]
    pub fn ic38() -> Self {
        let chapters = CHAPTERS
            .iter()
            .map(|(id, title, section, description)| {
                Chapter::new(ChapterId::new(*id), *title, *section, *description)
            })
            .collect();
        // The mock exam spans every section; `Common` is only a placeholder.
        let mock = Chapter::new(ChapterId::MOCK, MOCK_TITLE, Section::Common, MOCK_DESCRIPTION);
        Self { chapters, mock }
    }

    /// Real chapters in syllabus order.
    #[must_use]
    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    /// The `id = 0` full mock exam entry.
    #[must_use]
    pub fn mock_chapter(&self) -> &Chapter {
        &self.mock
    }

    /// Look up a chapter by id; `0` resolves to the mock chapter.
    #[must_use]
    pub fn find(&self, id: ChapterId) -> Option<&Chapter> {
        if id.is_mock() {
            return Some(&self.mock);
        }
        self.chapters.iter().find(|chapter| chapter.id() == id)
    }

    /// Partition the chapters by section, preserving relative order.
    #[must_use]
    pub fn sections(&self) -> Vec<SectionGroup<'_>> {
        Section::ALL
            .iter()
            .map(|section| SectionGroup {
                section: *section,
                chapters: self
                    .chapters
                    .iter()
                    .filter(|chapter| chapter.section() == *section)
                    .collect(),
            })
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::ic38()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lists_21_chapters_in_order() {
        let catalog = Catalog::ic38();
        let ids: Vec<u32> = catalog.chapters().iter().map(|c| c.id().value()).collect();
        assert_eq!(ids, (1..=21).collect::<Vec<_>>());
        assert!(catalog.chapters().iter().all(|c| !c.is_mock()));
    }

    #[test]
    fn mock_chapter_is_id_zero() {
        let catalog = Catalog::ic38();
        let mock = catalog.mock_chapter();
        assert!(mock.is_mock());
        assert_eq!(mock.id(), ChapterId::MOCK);
        assert!(mock.title().contains("Full Mock Test"));
    }

    #[test]
    fn sections_partition_preserving_order() {
        let catalog = Catalog::ic38();
        let groups = catalog.sections();
        assert_eq!(groups.len(), 3);

        let sizes: Vec<usize> = groups.iter().map(|g| g.chapters.len()).collect();
        assert_eq!(sizes, vec![5, 11, 5]);

        for group in &groups {
            assert!(group.chapters.iter().all(|c| c.section() == group.section));
            let ids: Vec<u32> = group.chapters.iter().map(|c| c.id().value()).collect();
            let mut sorted = ids.clone();
            sorted.sort_unstable();
            assert_eq!(ids, sorted);
        }
        assert_eq!(groups[1].chapters[0].id(), ChapterId::new(6));
    }

    #[test]
    fn find_resolves_real_and_mock_chapters() {
        let catalog = Catalog::ic38();
        assert_eq!(catalog.find(ChapterId::new(3)).map(Chapter::title), Some("शिकायत निवारण तंत्र"));
        assert!(catalog.find(ChapterId::MOCK).is_some_and(Chapter::is_mock));
        assert!(catalog.find(ChapterId::new(22)).is_none());
    }
}
