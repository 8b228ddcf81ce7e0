use shared::SessionUser;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub user: Option<SessionUser>,
    pub on_sign_out: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_sign_out = props.on_sign_out.reform(|_: MouseEvent| ());

    html! {
        <header class="header">
            <div class="container">
                <div class="profile">
                    {if let Some(user) = &props.user {
                        html! {
                            <>
                                {if let Some(url) = &user.avatar_url {
                                    html! {
                                        <img
                                            class="avatar"
                                            src={url.clone()}
                                            alt={user.name.clone()}
                                        />
                                    }
                                } else {
                                    html! {}
                                }}
                                <div>
                                    <span>{"Welcome,"}</span>
                                    <strong>{&user.name}</strong>
                                </div>
                            </>
                        }
                    } else {
                        html! { <span>{"Not signed in"}</span> }
                    }}
                </div>
                <button class="sign-out" aria-label="Sign out" onclick={on_sign_out}>
                    {"⏻"}
                </button>
            </div>
        </header>
    }
}
