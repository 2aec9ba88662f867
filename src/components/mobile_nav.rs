use crate::config::NavLink;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MobileNavProps {
    pub links: Vec<NavLink>,
    #[prop_or_default]
    pub initially_open: bool,
}

#[function_component(MobileNav)]
pub fn mobile_nav(props: &MobileNavProps) -> Html {
    let open = use_state(|| props.initially_open);

    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };
    // Any link closes the panel.
    let close = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(false))
    };

    html! {
        <nav class="md:hidden">
            <button
                id="menuBtn"
                type="button"
                class="p-2 rounded-lg text-gray-800 hover:bg-gray-100"
                aria-controls="mobileMenu"
                aria-expanded={(*open).to_string()}
                aria-label="Buka menu navigasi"
                onclick={toggle}
            >
                {"☰"}
            </button>
            <div id="mobileMenu" class={classes!("flex", "flex-col", "gap-2", "p-4", "bg-white", "shadow-md", (!*open).then_some("hidden"))}>
                { for props.links.iter().map(|link| html! {
                    <a href={link.href.clone()} class="py-2 font-semibold text-gray-800" onclick={close.clone()}>
                        { link.label.clone() }
                    </a>
                }) }
            </div>
        </nav>
    }
}
