#[cfg(test)]
mod tests {
    use apidoc_nav::{DocIndex, KeyEvent, SearchController, ViewMode};
    use scraper::{Html, Selector};

    /// The sample index of the generated page: two groups, 4 and 8
    /// methods, exactly as the generator emits it.
    fn sample_index_json() -> String {
        r#"[
            {
                "order": 1,
                "alias": "api",
                "description": "OllamaController",
                "anchorLink": "ollamacontroller",
                "methods": [
                    {"order": 1, "methodId": "b14f363f9b8d810e2817436330a1f762", "description": "generate"},
                    {"order": 2, "methodId": "ab18238bb9e4159f15e5b45c64f70de7", "description": "stream"},
                    {"order": 3, "methodId": "6e3cd9e29915983b8a716380071bd39f", "description": "streamJson"},
                    {"order": 4, "methodId": "56634af92ee2f686f328688ffb51d414", "description": "inquire"}
                ]
            },
            {
                "order": 2,
                "alias": "ArtMasterController",
                "description": "Art Master Controller - demonstrates chatting about learning Art with AI",
                "anchorLink": "art_master_controller_-_demonstrates_chatting_about_learning_art_with_ai",
                "methods": [
                    {"order": 1, "methodId": "260cdedf2bf3b1046b8715a475b014d6", "description": "/master"},
                    {"order": 2, "methodId": "94db77a81eb3a67d4f6bbeb0e114d85b", "description": "/master/raw"},
                    {"order": 3, "methodId": "cbd3d8856baac3d352260f5f46400fd8", "description": "/master/raw/client"},
                    {"order": 4, "methodId": "da9ce4a9d53525a6ed6a575bc5f0fda6", "description": "/master/raw/stream"},
                    {"order": 5, "methodId": "c6789631eff9777f0f21f4250bdb9e40", "description": "/master/stream"},
                    {"order": 6, "methodId": "8cef69d396e75b3c5ac6781dd1517f25", "description": "/master/words/stream"},
                    {"order": 7, "methodId": "d81a2b7a3ee67d6cd3396245c83e512e", "description": "/master/paintings"},
                    {"order": 8, "methodId": "fc909c4d9d8fbd8a3d41c1c829c899fd", "description": "/master/paintings/stream"}
                ]
            }
        ]"#
        .to_string()
    }

    fn controller() -> SearchController {
        let groups = serde_json::from_str(&sample_index_json()).unwrap();
        SearchController::new(DocIndex::from_groups(groups).unwrap())
    }

    #[test]
    fn test_scenario_method_match_truncates_to_first() {
        // "raw" matches three methods of the Art group; only the first
        // survives and the api group is gone entirely.
        let view = controller().on_enter("raw");

        assert_eq!(view.mode, ViewMode::Filtered);
        assert_eq!(view.groups.len(), 1);
        assert_eq!(view.groups[0].alias, "ArtMasterController");
        assert_eq!(view.groups[0].methods.len(), 1);
        assert_eq!(view.groups[0].methods[0].description, "/master/raw");
        assert_eq!(
            view.groups[0].methods[0].method_id,
            "94db77a81eb3a67d4f6bbeb0e114d85b"
        );
    }

    #[test]
    fn test_scenario_empty_query_renders_full_collapsed_view() {
        let c = controller();
        let view = c.on_enter("");

        assert_eq!(view.mode, ViewMode::Collapsed);
        assert_eq!(view.groups.len(), 2);
        assert_eq!(view.groups, c.index().groups().to_vec());

        let fragment = Html::parse_fragment(&view.html);
        let sublist = Selector::parse("ul.sectlevel2").unwrap();
        let sublists: Vec<_> = fragment.select(&sublist).collect();
        assert_eq!(sublists.len(), 2);
        for ul in &sublists {
            assert_eq!(ul.value().attr("style"), Some("display: none"));
        }
        // Every group <li> closed: class empty, no "open".
        assert!(!view.html.contains("class=\"open\""));
    }

    #[test]
    fn test_scenario_group_description_match_keeps_all_methods() {
        let view = controller().on_enter("ollamacontroller");

        assert_eq!(view.groups.len(), 1);
        assert_eq!(view.groups[0].alias, "api");
        assert_eq!(view.groups[0].methods.len(), 4);

        let fragment = Html::parse_fragment(&view.html);
        let link = Selector::parse("ul.sectlevel2 li a").unwrap();
        let labels: Vec<String> = fragment
            .select(&link)
            .map(|a| a.text().collect::<String>())
            .collect();
        assert_eq!(
            labels,
            vec![
                "1.1.\u{a0}generate",
                "1.2.\u{a0}stream",
                "1.3.\u{a0}streamJson",
                "1.4.\u{a0}inquire"
            ]
        );
    }

    #[test]
    fn test_scenario_no_match_renders_nothing() {
        let view = controller().on_enter("nonexistent");

        assert!(view.groups.is_empty());
        assert_eq!(view.html, "");
    }

    #[test]
    fn test_filtered_view_marks_groups_open() {
        let view = controller().on_enter("stream");

        let fragment = Html::parse_fragment(&view.html);
        let open_li = Selector::parse("li.open > a.dd").unwrap();
        let headers: Vec<_> = fragment.select(&open_li).collect();
        assert!(!headers.is_empty());
        for header in headers {
            let href = header.value().attr("href").unwrap();
            assert!(href.starts_with('#'));
        }

        let sublist = Selector::parse("ul.sectlevel2").unwrap();
        for ul in fragment.select(&sublist) {
            assert_eq!(ul.value().attr("style"), Some("display: block"));
        }
    }

    #[test]
    fn test_method_links_target_method_ids() {
        let view = controller().on_enter("inquire");

        let fragment = Html::parse_fragment(&view.html);
        let link = Selector::parse("ul.sectlevel2 li a").unwrap();
        let hrefs: Vec<_> = fragment
            .select(&link)
            .filter_map(|a| a.value().attr("href"))
            .collect();
        assert_eq!(hrefs, vec!["#56634af92ee2f686f328688ffb51d414"]);
    }

    #[test]
    fn test_uppercase_query_matches_like_lowercase() {
        let lower = controller().on_enter("raw");
        let upper = controller().on_enter("RAW");
        assert_eq!(lower.groups, upper.groups);
        assert_eq!(lower.html, upper.html);
    }

    #[test]
    fn test_non_enter_keys_do_nothing() {
        let c = controller();
        assert!(c.handle_key(KeyEvent::Other, "raw").is_none());
        assert!(c.handle_key(KeyEvent::Other, "").is_none());
    }
}
