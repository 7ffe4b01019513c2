use lazy_static::lazy_static;
use model::artist::{Artist, ArtistIndex};
use pinyin::ToPinyin;
use regex::Regex;
use std::collections::HashMap;

lazy_static! {
    static ref INDEX_GROUPS_RX: Regex = Regex::new(r"(.+)\((.+)\)").unwrap();
}

/// 艺术家索引分组规则，例如 `A B ... X-Z(XYZ) [Unknown]([)`
#[derive(Debug, Clone)]
pub struct ArtistIndexRule {
    /// (小写前缀, 分组名)，按配置顺序匹配
    index_groups: Vec<(String, String)>,
    prefer_sort_tags: bool,
    ignored_articles: Vec<String>,
}

impl ArtistIndexRule {
    fn parse_index_groups(specs: &str) -> Vec<(String, String)> {
        let mut parsed = Vec::new();
        for g in specs.split_whitespace() {
            match INDEX_GROUPS_RX.captures(g) {
                Some(caps) => {
                    let group = &caps[1];
                    for c in caps[2].chars() {
                        parsed.push((c.to_lowercase().to_string(), group.to_string()));
                    }
                }
                // 不是 "组名(字符)" 的形式，该组本身就是前缀
                None => parsed.push((g.to_lowercase(), g.to_string())),
            }
        }
        parsed
    }

    pub fn new(specs: &str, prefer_sort_tags: bool, ignored_articles: Vec<String>) -> Self {
        Self {
            index_groups: Self::parse_index_groups(specs),
            prefer_sort_tags,
            ignored_articles,
        }
    }

    /// 分组并排序：分组按索引键排序，组内按排序名排序
    pub fn group(&self, artists: Vec<Artist>) -> Vec<ArtistIndex> {
        let mut index: HashMap<String, Vec<(String, Artist)>> = HashMap::new();
        for artist in artists {
            let sort_key = self.sort_key(&artist);
            let key = self.index_key(&sort_key);
            index.entry(key).or_default().push((sort_key, artist));
        }

        let mut result: Vec<ArtistIndex> = index
            .into_iter()
            .map(|(id, mut artists)| {
                artists.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.id.cmp(&b.1.id)));
                ArtistIndex {
                    id,
                    artists: artists.into_iter().map(|(_, artist)| artist).collect(),
                }
            })
            .collect();

        result.sort_by(|a, b| a.id.cmp(&b.id));
        result
    }

    fn sort_key(&self, artist: &Artist) -> String {
        let source = if self.prefer_sort_tags && !artist.sort_name.is_empty() {
            &artist.sort_name
        } else if !artist.order_name.is_empty() {
            &artist.order_name
        } else {
            &artist.name
        };
        remove_article(source.trim(), &self.ignored_articles).to_lowercase()
    }

    fn index_key(&self, name: &str) -> String {
        for (prefix, group) in &self.index_groups {
            if name.starts_with(prefix.as_str()) {
                return group.clone();
            }
        }

        // 中文名取拼音首字母
        if let Some(first_char) = name.chars().next() {
            if is_cjk(first_char) {
                if let Some(pinyin) = first_char.to_pinyin() {
                    if let Some(initial) = pinyin.plain().chars().next() {
                        return initial.to_uppercase().to_string();
                    }
                }
            }
        }

        "#".to_string()
    }
}

fn is_cjk(c: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&c)
}

/// 移除开头的冠词，例如 "The Beatles" -> "Beatles"
fn remove_article(name: &str, articles: &[String]) -> String {
    for article in articles {
        let prefix = format!("{} ", article);
        if let Some(rest) = name.strip_prefix(&prefix) {
            return rest.to_string();
        }
    }
    name.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const GROUPS: &str = "A B C D E F G H I J K L M N O P Q R S T U V W X-Z(XYZ) [Unknown]([)";

    fn rule() -> ArtistIndexRule {
        ArtistIndexRule::new(GROUPS, true, vec!["The".to_string(), "El".to_string()])
    }

    fn artist(id: &str, name: &str, sort_name: &str) -> Artist {
        Artist {
            id: id.to_string(),
            name: name.to_string(),
            sort_name: sort_name.to_string(),
            order_name: String::new(),
            album_count: 1,
        }
    }

    fn ids(indexes: &[ArtistIndex]) -> Vec<&str> {
        indexes.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_parse_index_groups() {
        let groups = ArtistIndexRule::parse_index_groups("A X-Z(XYZ) [Unknown]([)");
        assert_eq!(
            groups,
            vec![
                ("a".to_string(), "A".to_string()),
                ("x".to_string(), "X-Z".to_string()),
                ("y".to_string(), "X-Z".to_string()),
                ("z".to_string(), "X-Z".to_string()),
                ("[".to_string(), "[Unknown]".to_string()),
            ]
        );
    }

    #[test]
    fn test_group_by_first_letter() {
        let indexes = rule().group(vec![
            artist("1", "Miles Davis", ""),
            artist("2", "Bill Evans", ""),
            artist("3", "Yes", ""),
            artist("4", "Zappa", ""),
            artist("5", "[Unknown Artist]", ""),
            artist("6", "2Pac", ""),
        ]);
        assert_eq!(ids(&indexes), vec!["#", "B", "M", "X-Z", "[Unknown]"]);
        let xz = indexes.iter().find(|i| i.id == "X-Z").unwrap();
        let names: Vec<&str> = xz.artists.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Yes", "Zappa"]);
    }

    #[test]
    fn test_articles_and_sort_names() {
        let indexes = rule().group(vec![
            artist("1", "The Beatles", ""),
            artist("2", "Miles Davis", "Davis, Miles"),
        ]);
        assert_eq!(ids(&indexes), vec!["B", "D"]);

        let no_sort = ArtistIndexRule::new(GROUPS, false, vec![]);
        let indexes = no_sort.group(vec![
            artist("1", "The Beatles", ""),
            artist("2", "Miles Davis", "Davis, Miles"),
        ]);
        assert_eq!(ids(&indexes), vec!["M", "T"]);
    }

    #[test]
    fn test_cjk_names_use_pinyin_initial() {
        let indexes = rule().group(vec![artist("1", "周杰伦", "")]);
        assert_eq!(ids(&indexes), vec!["Z"]);
    }
}
