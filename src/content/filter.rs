use std::collections::BTreeMap;

use crate::content::model::Story;

/// Story listing filters. Both are optional and compose.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoryFilter {
    pub difficulty: Option<u32>,
    pub search: String,
}

impl StoryFilter {
    pub fn matches(&self, story: &Story) -> bool {
        if let Some(level) = self.difficulty
            && story.difficulty != level
        {
            return false;
        }
        let term = self.search.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        story.title.to_lowercase().contains(&term)
            || story.description.to_lowercase().contains(&term)
    }

    /// Advance the difficulty filter: all, then each level present, then all again.
    pub fn cycle_difficulty(&mut self, levels: &[u32]) {
        self.difficulty = match self.difficulty {
            None => levels.first().copied(),
            Some(current) => levels.iter().copied().find(|&l| l > current),
        };
    }

    pub fn apply<'a>(&self, stories: &'a [Story]) -> Vec<&'a Story> {
        stories.iter().filter(|s| self.matches(s)).collect()
    }
}

/// Group stories by difficulty; iteration order is ascending level, and
/// stories keep their source order within a level.
pub fn group_by_difficulty<'a>(
    stories: impl IntoIterator<Item = &'a Story>,
) -> BTreeMap<u32, Vec<&'a Story>> {
    let mut groups: BTreeMap<u32, Vec<&Story>> = BTreeMap::new();
    for story in stories {
        groups.entry(story.difficulty).or_default().push(story);
    }
    groups
}

/// Sorted distinct difficulty levels present in `stories`.
pub fn levels(stories: &[Story]) -> Vec<u32> {
    group_by_difficulty(stories).into_keys().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::model::Chapter;

    fn story(id: i64, title: &str, description: &str, difficulty: u32) -> Story {
        Story {
            id,
            title: title.to_string(),
            description: description.to_string(),
            difficulty,
            chapters: vec![Chapter {
                urdu_text: "ایک".to_string(),
                transliteration: String::new(),
                english_meaning: String::new(),
                vocab: Vec::new(),
                difficult_words: Vec::new(),
            }],
        }
    }

    fn library() -> Vec<Story> {
        vec![
            story(1, "پیاسا کوا", "The Thirsty Crow", 2),
            story(2, "بلی اور چوہا", "A cat and a mouse", 1),
            story(3, "سچا دوست", "A true friend", 3),
            story(4, "چالاک لومڑی", "The clever fox and the crow", 1),
        ]
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let stories = library();
        assert_eq!(StoryFilter::default().apply(&stories).len(), 4);
        let blank = StoryFilter {
            difficulty: None,
            search: "   ".to_string(),
        };
        assert_eq!(blank.apply(&stories).len(), 4);
    }

    #[test]
    fn test_search_is_case_insensitive_over_title_and_description() {
        let stories = library();
        let filter = StoryFilter {
            difficulty: None,
            search: "CROW".to_string(),
        };
        let ids: Vec<i64> = filter.apply(&stories).iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 4]);

        let urdu = StoryFilter {
            difficulty: None,
            search: "بلی".to_string(),
        };
        assert_eq!(urdu.apply(&stories)[0].id, 2);
    }

    #[test]
    fn test_filters_compose() {
        let stories = library();
        let filter = StoryFilter {
            difficulty: Some(1),
            search: "crow".to_string(),
        };
        let ids: Vec<i64> = filter.apply(&stories).iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![4]);
    }

    #[test]
    fn test_groups_ascend_by_level() {
        let stories = library();
        let groups = group_by_difficulty(&stories);
        assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        let level_one: Vec<i64> = groups[&1].iter().map(|s| s.id).collect();
        assert_eq!(level_one, vec![2, 4]);
    }

    #[test]
    fn test_cycle_difficulty_wraps_to_all() {
        let levels = levels(&library());
        let mut filter = StoryFilter::default();
        filter.cycle_difficulty(&levels);
        assert_eq!(filter.difficulty, Some(1));
        filter.cycle_difficulty(&levels);
        assert_eq!(filter.difficulty, Some(2));
        filter.cycle_difficulty(&levels);
        assert_eq!(filter.difficulty, Some(3));
        filter.cycle_difficulty(&levels);
        assert_eq!(filter.difficulty, None);
    }
}
