use yew::{html, Component, Context, Html};

pub struct Header;

impl Component for Header {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Header
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <header class="header">
                <div class="header-content">
                    <div class="header-icon">{"🎭"}</div>
                    <h1 class="header-title">{"Meme Generator"}</h1>
                    <p class="header-subtitle">{"Create hilarious memes with custom text!"}</p>
                </div>
            </header>
        }
    }
}
