//! Hero headline typewriter.

use std::rc::Rc;

use pri_core::animator::play;
use pri_core::selectors::HERO_TYPE_ID;
use wasm_bindgen::JsValue;

use crate::context::SiteContext;

pub fn install(ctx: &Rc<SiteContext>) -> Result<(), JsValue> {
    let Some(target) = ctx.document.get_element_by_id(HERO_TYPE_ID) else {
        return Ok(());
    };
    target.set_inner_html("");
    play(
        Rc::clone(&ctx.scheduler),
        ctx.config.hero_markup.clone(),
        move |revealed| target.set_inner_html(revealed),
    );
    Ok(())
}
