//! HTML page generation
//!
//! Generates a self-contained catalog page with embedded CSS and JavaScript.
//! The page script implements the filter buttons, difficulty selector,
//! module popup and selection download in the browser.

use coursecat_core::layout::SKILL_SEGMENTS;
use coursecat_core::{CatalogData, CatalogView, Difficulty, TileView, SELECTION_FILE_NAME};

/// Render the catalog page
pub fn render_page(data: &CatalogData, view: &CatalogView, title: &str) -> anyhow::Result<String> {
    let catalog_json = serde_json::to_string(data)?;

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
    <div class="header">
        <h1>{title}</h1>
        <button class="study-button all active" data-filter-class="all">Show All</button>
        {buttons}
        <select id="difficulty-filter">
            {difficulty_options}
        </select>
        <button id="download-button">Download selection</button>
    </div>
    <main class="topics">
        {buckets}
    </main>
    <div id="popup" class="popup">
        <div class="popup-content">
            <span class="close" onclick="closePopup()">&times;</span>
            <h2 id="course-name"></h2>
            <p id="popup-course-description"></p>
            <div class="accordion"></div>
        </div>
    </div>
    <script type="application/json" id="catalog-data">{catalog_json}</script>
    <script>{js}</script>
</body>
</html>
"#,
        title = escape_html(title),
        css = inline_css(),
        js = inline_javascript(),
        buttons = render_filter_buttons(view),
        difficulty_options = render_difficulty_options(),
        buckets = render_buckets(view),
        catalog_json = escape_script_json(&catalog_json),
    ))
}

/// Render the page that replaces the catalog when loading fails
pub fn render_error_page(message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Course Catalog</title>
</head>
<body>
    <p style="color: red; text-align: center; padding: 20px;">{}</p>
</body>
</html>
"#,
        escape_html(message)
    )
}

fn render_filter_buttons(view: &CatalogView) -> String {
    view.buttons
        .iter()
        .map(|button| {
            let style = button
                .color
                .as_ref()
                .map(|c| format!(r#" style="background-color: {}""#, escape_html(c)))
                .unwrap_or_default();
            format!(
                r#"<button class="study-button {id}" data-filter-class="{id}"{style}>{label}</button>"#,
                id = escape_html(&button.class_id),
                style = style,
                label = escape_html(&button.label),
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ")
}

fn render_difficulty_options() -> String {
    let mut options = vec![r#"<option value="all" selected>All levels</option>"#.to_string()];
    for difficulty in Difficulty::ALL {
        options.push(format!(
            r#"<option value="{value}">{value}</option>"#,
            value = difficulty.as_str()
        ));
    }
    options.join("\n            ")
}

fn render_buckets(view: &CatalogView) -> String {
    view.buckets
        .iter()
        .map(|bucket| {
            let tiles: Vec<String> = bucket.tiles.iter().map(render_tile).collect();
            format!(
                r#"<section class="topic">
            <h2>{label}</h2>
            <div id="{container}" class="tiles">
                {tiles}
            </div>
        </section>"#,
                label = bucket.category.label(),
                container = bucket.category.container_id(),
                tiles = tiles.join("\n                "),
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ")
}

fn render_tile(tile: &TileView) -> String {
    let mut classes = vec!["course-tile".to_string(), escape_html(&tile.difficulty_class)];
    classes.extend(tile.class_tags.iter().map(|tag| escape_html(tag)));

    let labels: String = tile
        .unit_labels
        .iter()
        .map(|label| format!(r#"<div class="label">{}</div>"#, escape_html(label)))
        .collect();

    let indicators: String = tile
        .indicators
        .iter()
        .map(|indicator| {
            let style = indicator
                .color
                .as_ref()
                .map(|c| format!(r#" style="background-color: {}""#, escape_html(c)))
                .unwrap_or_default();
            format!(
                r#"<div class="indicator {}" title="{}"{}></div>"#,
                escape_html(&indicator.class_id),
                escape_html(&indicator.class_id),
                style
            )
        })
        .collect();

    let bars: String = (0..SKILL_SEGMENTS)
        .map(|segment| {
            if segment < tile.skill_level {
                r#"<div class="bar filled"></div>"#
            } else {
                r#"<div class="bar"></div>"#
            }
        })
        .collect();

    format!(
        r#"<div class="{classes}" data-topic="{topic}" data-difficulty="{difficulty}" data-module-id="{id}" data-accordion="{accordion}"><div class="course-header">{name}</div><div class="course-labels">{labels}</div><div class="membership-indicators">{indicators}</div><div class="skill-level">{bars}</div></div>"#,
        classes = classes.join(" "),
        topic = tile.category.label(),
        difficulty = escape_html(&tile.difficulty_class),
        id = escape_html(&tile.module_id),
        accordion = escape_html(&tile.accordion_data),
        name = escape_html(&tile.name),
        labels = labels,
        indicators = indicators,
        bars = bars,
    )
}

/// Escape text for HTML content and quoted attribute values
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Keep embedded JSON from closing its script element
fn escape_script_json(json: &str) -> String {
    json.replace('<', "\\u003c")
}

fn inline_css() -> &'static str {
    r#"
* { box-sizing: border-box; }
body { font-family: system-ui, -apple-system, 'Segoe UI', sans-serif; margin: 0; color: #1f2933; background: #f5f7fa; }
.header { display: flex; flex-wrap: wrap; align-items: center; gap: 0.5rem; padding: 1rem 2rem; background: #ffffff; border-bottom: 1px solid #e4e7eb; }
.header h1 { width: 100%; margin: 0 0 0.5rem; font-size: 1.5rem; }
.study-button { border: none; border-radius: 999px; padding: 0.4rem 1rem; background: #9aa5b1; color: #ffffff; cursor: pointer; opacity: 0.6; }
.study-button.active { opacity: 1; box-shadow: 0 0 0 2px #1f2933; }
#difficulty-filter, #download-button { margin-left: auto; padding: 0.4rem 0.8rem; }
#download-button { margin-left: 0.5rem; cursor: pointer; }
.topics { display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 1.5rem; padding: 1.5rem 2rem; }
.topic h2 { font-size: 1.1rem; margin: 0 0 0.75rem; }
.tiles { display: flex; flex-direction: column; gap: 0.75rem; }
.course-tile { display: flex; flex-direction: column; gap: 0.5rem; padding: 0.9rem; background: #ffffff; border-radius: 8px; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.12); cursor: pointer; }
.course-header { font-weight: 600; }
.course-labels { display: flex; flex-wrap: wrap; gap: 0.3rem; }
.label { font-size: 0.75rem; padding: 0.15rem 0.5rem; border-radius: 4px; background: #e4e7eb; }
.membership-indicators { display: flex; gap: 0.3rem; }
.indicator { width: 0.75rem; height: 0.75rem; border-radius: 50%; background: #9aa5b1; }
.skill-level { display: flex; gap: 0.2rem; }
.bar { width: 1.2rem; height: 0.35rem; border-radius: 2px; background: #e4e7eb; }
.bar.filled { background: #3e4c59; }
.popup { display: none; position: fixed; inset: 0; background: rgba(0, 0, 0, 0.45); }
.popup-content { max-width: 640px; margin: 8vh auto; padding: 1.5rem; background: #ffffff; border-radius: 8px; max-height: 80vh; overflow-y: auto; }
.close { float: right; font-size: 1.5rem; cursor: pointer; }
.accordion-button { display: block; width: 100%; text-align: left; padding: 0.6rem; margin-top: 0.4rem; border: none; background: #e4e7eb; cursor: pointer; }
.accordion-button.active { background: #cbd2d9; }
.panel { display: none; padding: 0 0.6rem; white-space: pre-line; }
"#
}

fn inline_javascript() -> String {
    format!(
        r#"
(function () {{
    'use strict';

    var catalog = JSON.parse(document.getElementById('catalog-data').textContent);
    var modules = new Map(catalog.modules.map(function (m) {{ return [m.ModuleID, m]; }}));

    var studyButtons = Array.from(document.querySelectorAll('.study-button'));
    var difficultyFilter = document.getElementById('difficulty-filter');
    var allTiles = Array.from(document.querySelectorAll('.course-tile'));
    var popup = document.getElementById('popup');
    var accordion = popup.querySelector('.accordion');

    function tileVisible(tile) {{
        var active = document.querySelector('.study-button.active');
        var classOk = true;
        if (active && active.dataset.filterClass !== 'all') {{
            var module = modules.get(tile.dataset.moduleId);
            classOk = !!module && module.majorClassIDs.indexOf(active.dataset.filterClass) !== -1;
        }}
        var level = difficultyFilter.value;
        var levelOk = level === 'all' || tile.dataset.difficulty === level;
        return classOk && levelOk;
    }}

    function filterTiles() {{
        allTiles.forEach(function (tile) {{
            tile.style.display = tileVisible(tile) ? 'flex' : 'none';
        }});
    }}

    studyButtons.forEach(function (button) {{
        button.addEventListener('click', function () {{
            if (button.classList.contains('active') && button.dataset.filterClass !== 'all') {{
                button.classList.remove('active');
                document.querySelector('.study-button.all').classList.add('active');
            }} else {{
                studyButtons.forEach(function (b) {{ b.classList.remove('active'); }});
                button.classList.add('active');
            }}
            filterTiles();
        }});
    }});

    difficultyFilter.addEventListener('change', filterTiles);

    allTiles.forEach(function (tile) {{
        tile.addEventListener('click', function () {{
            var module = modules.get(tile.dataset.moduleId);
            if (!module) {{
                console.error('Module data not found for tile:', tile);
                return;
            }}

            document.getElementById('course-name').textContent = module.ModuleName;
            document.getElementById('popup-course-description').textContent =
                module.ModuleDescription || 'No general description available.';

            accordion.innerHTML = '';
            module.units.forEach(function (unit) {{
                if (!unit.UnitName.trim()) {{
                    return;
                }}
                var header = document.createElement('button');
                header.classList.add('accordion-button');
                header.textContent = unit.UnitName;

                var panel = document.createElement('div');
                panel.classList.add('panel');
                var details = document.createElement('p');
                details.textContent = unit.UnitDescription || 'Details not available.';
                panel.appendChild(details);

                header.addEventListener('click', function () {{
                    header.classList.toggle('active');
                    panel.style.display = panel.style.display === 'block' ? 'none' : 'block';
                }});

                accordion.appendChild(header);
                accordion.appendChild(panel);
            }});

            popup.style.display = 'block';
        }});
    }});

    window.closePopup = function () {{
        popup.style.display = 'none';
        accordion.querySelectorAll('.panel').forEach(function (panel) {{
            panel.style.display = 'none';
        }});
        accordion.querySelectorAll('.accordion-button').forEach(function (button) {{
            button.classList.remove('active');
        }});
    }};

    document.getElementById('download-button').addEventListener('click', function () {{
        var names = allTiles
            .filter(function (tile) {{ return tile.style.display !== 'none'; }})
            .map(function (tile) {{
                var module = modules.get(tile.dataset.moduleId);
                return module ? module.ModuleName : '{unknown}';
            }});

        if (names.length === 0) {{
            alert('No courses selected for download.');
            return;
        }}

        var blob = new Blob(['{header}\n' + names.join('\n')], {{ type: 'text/csv;charset=utf-8' }});
        var link = document.createElement('a');
        link.href = URL.createObjectURL(blob);
        link.download = '{file_name}';
        document.body.appendChild(link);
        link.click();
        document.body.removeChild(link);
        URL.revokeObjectURL(link.href);
    }});

    filterTiles();
}})();
"#,
        unknown = coursecat_core::UNKNOWN_COURSE,
        header = coursecat_core::export::SELECTION_HEADER,
        file_name = SELECTION_FILE_NAME,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursecat_core::{join_catalog, layout_catalog, ClassRecord, ModuleRecord, UnitRecord};

    fn sample() -> CatalogData {
        join_catalog(
            vec![ClassRecord {
                class_id: "MED".to_string(),
                button_text: "Medicine & Health".to_string(),
                color: Some("#c0392b".to_string()),
            }],
            vec![ModuleRecord {
                module_id: "M1".to_string(),
                module_name: "Calculus <intro>".to_string(),
                module_description: Some("</script><b>".to_string()),
                category: "Mathematics".to_string(),
                difficulty: "Intermediate".to_string(),
                major_class_ids: Some("MED".to_string()),
            }],
            vec![UnitRecord {
                unit_id: None,
                module_id: "M1".to_string(),
                unit_name: "Limits".to_string(),
                unit_description: Some("Say \"hi\"".to_string()),
            }],
        )
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<a href="x">'&'</a>"#), "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;");
    }

    #[test]
    fn test_render_page_contents() {
        let data = sample();
        let view = layout_catalog(&data);
        let html = render_page(&data, &view, "Course Catalog").unwrap();

        assert!(html.contains(r#"data-filter-class="MED" style="background-color: #c0392b">Medicine &amp; Health</button>"#));
        assert!(html.contains(r#"<div class="course-tile intermediate MED" data-topic="Mathematics" data-difficulty="intermediate" data-module-id="M1""#));
        assert!(html.contains(r#"data-accordion="Limits:Say &quot;hi&quot;""#));
        assert!(html.contains("Calculus &lt;intro&gt;"));
        assert!(html.contains(r#"<div class="bar filled"></div><div class="bar filled"></div><div class="bar"></div>"#));
        assert!(html.contains(r#"id="math-container""#));
        assert!(html.contains(r#"id="ml-container""#));
        assert!(html.contains(r#"id="applications-container""#));
        assert!(html.contains("link.download = 'selected_courses.txt'"));
    }

    #[test]
    fn test_embedded_json_cannot_close_script() {
        let data = sample();
        let view = layout_catalog(&data);
        let html = render_page(&data, &view, "Course Catalog").unwrap();

        let start = html.find(r#"<script type="application/json" id="catalog-data">"#).unwrap();
        let end = html[start..].find("</script>").unwrap() + start;
        let embedded = &html[start..end];
        assert!(!embedded.contains("</script><b>"));
        assert!(embedded.contains("\\u003c/script>\\u003cb>"));
    }

    #[test]
    fn test_error_page() {
        let html = render_error_page("Details: Failed to fetch <units.csv>");
        assert!(html.contains("color: red"));
        assert!(html.contains("Failed to fetch &lt;units.csv&gt;"));
    }
}
