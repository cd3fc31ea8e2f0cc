use super::Icon;
use crate::nav_model::NavModelItem;
use dioxus::prelude::*;

/// Menu built from a navigation node: its title, then one entry per child
#[component]
pub fn TopNavBarMenu(node: NavModelItem) -> Element {
    rsx! {
        div { class: "top-nav-bar-menu", "data-testid": "top-nav-bar-menu",
            div { class: "top-nav-bar-menu-header",
                div { class: "top-nav-bar-menu-title", "{node.text}" }
                if let Some(sub_title) = &node.sub_title {
                    div { class: "top-nav-bar-menu-subtitle", "{sub_title}" }
                }
            }
            ul { class: "top-nav-bar-menu-items",
                for (index , item) in node.children.iter().enumerate() {
                    TopNavBarMenuEntry { key: "{index}", item: item.clone() }
                }
            }
        }
    }
}

#[component]
fn TopNavBarMenuEntry(item: NavModelItem) -> Element {
    if item.divider {
        return rsx! {
            li { class: "top-nav-bar-menu-divider", role: "separator" }
        };
    }

    rsx! {
        li { class: "top-nav-bar-menu-item", role: "menuitem",
            a { href: item.url.clone(), target: item.target.clone(),
                if let Some(icon) = &item.icon {
                    Icon { name: icon.clone() }
                }
                span { "{item.text}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_menu() -> Element {
        let mut divider = NavModelItem::new("", "");
        divider.divider = true;
        let mut sign_out = NavModelItem::new("sign-out", "Sign out").with_url("/logout");
        sign_out.icon = Some("signout".to_string());
        sign_out.target = Some("_self".to_string());

        let mut node = NavModelItem::new("profile", "admin").with_children(vec![
            NavModelItem::new("preferences", "Preferences").with_url("/profile"),
            divider,
            sign_out,
        ]);
        node.sub_title = Some("admin@localhost".to_string());

        rsx! {
            TopNavBarMenu { node: node }
        }
    }

    #[test]
    fn test_menu_lists_children_and_dividers() {
        let mut dom = VirtualDom::new(profile_menu);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("admin@localhost"));
        assert_eq!(html.matches("role=\"menuitem\"").count(), 2);
        assert_eq!(html.matches("role=\"separator\"").count(), 1);
        assert!(html.contains("href=\"/logout\""));
        assert!(html.contains("target=\"_self\""));
        assert!(html.find("Preferences").unwrap() < html.find("Sign out").unwrap());
    }
}
