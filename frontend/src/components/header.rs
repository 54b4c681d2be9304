use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub signed_in: bool,
    #[prop_or_default]
    pub username: Option<String>,
}

/// Text next to the title; nothing when there is no session
pub fn user_label(signed_in: bool, username: Option<&str>) -> Option<String> {
    if !signed_in {
        return None;
    }
    Some(match username {
        Some(name) => format!("Signed in as {}", name),
        None => "Signed in".to_string(),
    })
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="header">
            <div class="container">
                <h1>{"FitLog"}</h1>
                <div class="header-right">
                    {if let Some(label) = user_label(props.signed_in, props.username.as_deref()) {
                        html! { <span class="header-user">{label}</span> }
                    } else { html! {} }}
                </div>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_out_header_has_no_user_label() {
        assert_eq!(user_label(false, None), None);
        assert_eq!(user_label(false, Some("dana")), None);
    }

    #[test]
    fn test_signed_in_header_names_user() {
        assert_eq!(user_label(true, Some("dana")).as_deref(), Some("Signed in as dana"));
        assert_eq!(user_label(true, None).as_deref(), Some("Signed in"));
    }
}
