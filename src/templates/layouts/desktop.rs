use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="leaflet/leaflet.css";
                link rel="stylesheet" href="css/style.css";
            }
            body {
                main {
                    (content)
                }
            }
        }
    }
}
