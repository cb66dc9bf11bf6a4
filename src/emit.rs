use crate::{
    dispatch::DispatchShape,
    model::{PropValue, TweenPosition},
    normalize::Identifier,
    reduced_motion::{GuardDescriptor, ResolvedTween, TimelineValues},
};

/// Everything an emitter needs. Built once by the facade; all five emitters
/// consume the same value.
#[derive(Clone, Debug)]
pub struct EmitInput {
    pub ident: Identifier,
    pub shape: DispatchShape,
    pub tweens: Vec<ResolvedTween>,
    pub timeline: TimelineValues,
    pub guard: GuardDescriptor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Style {
    Pretty,
    Compact,
}

impl Style {
    fn kv(self) -> &'static str {
        match self {
            Self::Pretty => ": ",
            Self::Compact => ":",
        }
    }

    fn sep(self) -> &'static str {
        match self {
            Self::Pretty => ", ",
            Self::Compact => ",",
        }
    }

    fn assign(self) -> &'static str {
        match self {
            Self::Pretty => " = ",
            Self::Compact => "=",
        }
    }

    fn arrow(self) -> &'static str {
        match self {
            Self::Pretty => " => ",
            Self::Compact => "=>",
        }
    }
}

/// Statement-at-a-time JS writer. Pretty mode indents and newlines; compact
/// mode concatenates the same statements, so the two renderings differ only
/// in insignificant whitespace and comments.
pub(crate) struct JsWriter {
    out: String,
    style: Style,
    depth: usize,
}

impl JsWriter {
    pub(crate) fn new(style: Style) -> Self {
        Self {
            out: String::new(),
            style,
            depth: 0,
        }
    }

    pub(crate) fn style(&self) -> Style {
        self.style
    }

    pub(crate) fn stmt(&mut self, s: &str) {
        match self.style {
            Style::Pretty => {
                for _ in 0..self.depth {
                    self.out.push_str("  ");
                }
                self.out.push_str(s);
                self.out.push('\n');
            }
            Style::Compact => self.out.push_str(s),
        }
    }

    pub(crate) fn comment(&mut self, s: &str) {
        if self.style == Style::Pretty {
            self.stmt(&format!("// {s}"));
        }
    }

    pub(crate) fn blank(&mut self) {
        if self.style == Style::Pretty {
            self.out.push('\n');
        }
    }

    pub(crate) fn open_block(&mut self, head: &str) {
        self.stmt(head);
        self.depth += 1;
    }

    pub(crate) fn close_block(&mut self, tail: &str) {
        self.depth -= 1;
        self.stmt(tail);
    }

    pub(crate) fn finish(self) -> String {
        self.out
    }
}

pub(crate) fn js_bool(b: bool) -> &'static str {
    if b { "true" } else { "false" }
}

pub(crate) fn js_number(v: f64) -> String {
    // -0.0 would print as "-0"; fold it into "0".
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{v}")
}

pub(crate) fn js_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

pub(crate) struct JsProp {
    key: &'static str,
    value: JsValue,
}

pub(crate) enum JsValue {
    Raw(String),
    Obj(Vec<JsProp>),
}

impl JsProp {
    pub(crate) fn raw(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: JsValue::Raw(value.into()),
        }
    }

    pub(crate) fn obj(key: &'static str, props: Vec<JsProp>) -> Self {
        Self {
            key,
            value: JsValue::Obj(props),
        }
    }
}

fn write_props(w: &mut JsWriter, props: &[JsProp]) {
    let style = w.style();
    for (i, prop) in props.iter().enumerate() {
        let comma = if i + 1 == props.len() { "" } else { "," };
        match &prop.value {
            JsValue::Raw(v) => w.stmt(&format!("{}{}{}{}", prop.key, style.kv(), v, comma)),
            JsValue::Obj(inner) => {
                w.open_block(&format!("{}{}{{", prop.key, style.kv()));
                write_props(w, inner);
                w.close_block(&format!("}}{comma}"));
            }
        }
    }
}

fn inline_object(pairs: &[(String, String)], style: Style) -> String {
    let body = pairs
        .iter()
        .map(|(k, v)| format!("{k}{}{v}", style.kv()))
        .collect::<Vec<_>>()
        .join(style.sep());
    match style {
        Style::Pretty => format!("{{ {body} }}"),
        Style::Compact => format!("{{{body}}}"),
    }
}

pub(crate) fn import_stmts(shape: &DispatchShape, style: Style) -> Vec<&'static str> {
    let mut lines = vec![match style {
        Style::Pretty => r#"import gsap from "gsap";"#,
        Style::Compact => r#"import gsap from"gsap";"#,
    }];
    if shape.needs_scroll_plugin() {
        lines.push(match style {
            Style::Pretty => r#"import { ScrollTrigger } from "gsap/ScrollTrigger";"#,
            Style::Compact => r#"import{ScrollTrigger}from"gsap/ScrollTrigger";"#,
        });
    }
    lines
}

pub(crate) fn write_timeline(w: &mut JsWriter, input: &EmitInput) {
    let style = w.style();
    let mut props: Vec<JsProp> = Vec::new();
    if input.shape.starts_paused() {
        props.push(JsProp::raw("paused", "true"));
    }
    props.push(JsProp::raw("repeat", input.timeline.repeat.to_string()));
    props.push(JsProp::raw("yoyo", js_bool(input.timeline.yoyo)));
    props.push(JsProp::raw("delay", js_number(input.timeline.delay)));
    if let DispatchShape::Scroll(binding) = &input.shape {
        props.push(JsProp::obj(
            "scrollTrigger",
            vec![
                JsProp::raw("trigger", js_str(&binding.trigger)),
                JsProp::raw("start", js_str(&binding.start)),
                JsProp::raw("end", js_str(&binding.end)),
                JsProp::raw("scrub", js_bool(binding.scrub)),
                JsProp::raw("pin", js_bool(binding.pin)),
                JsProp::raw("toggleActions", js_str(&binding.toggle_actions)),
                JsProp::raw("markers", js_bool(binding.markers)),
            ],
        ));
    }

    w.open_block(&format!(
        "const {}{}gsap.timeline({{",
        input.ident.as_str(),
        style.assign()
    ));
    write_props(w, &props);
    w.close_block("});");
}

pub(crate) fn tween_call(ident: &str, tween: &ResolvedTween, style: Style) -> String {
    let mut pairs: Vec<(String, String)> = tween
        .properties
        .iter()
        .map(|(k, v)| {
            let rendered = match v {
                PropValue::Number(n) => js_number(*n),
                PropValue::Text(s) => js_str(s),
            };
            (k.clone(), rendered)
        })
        .collect();
    pairs.push(("duration".to_string(), js_number(tween.duration)));
    pairs.push(("ease".to_string(), js_str(&tween.ease)));
    if let Some(stagger) = tween.stagger {
        pairs.push(("stagger".to_string(), js_number(stagger)));
    }

    let vars = inline_object(&pairs, style);
    let position = match &tween.position {
        Some(TweenPosition::Offset(offset)) => format!("{}{}", style.sep(), js_number(*offset)),
        Some(TweenPosition::Label(label)) => format!("{}{}", style.sep(), js_str(label)),
        None => String::new(),
    };

    format!(
        "{ident}.to({}{}{vars}{position});",
        js_str(&tween.target),
        style.sep()
    )
}

fn write_listeners(w: &mut JsWriter, input: &EmitInput) {
    let style = w.style();
    let ident = input.ident.as_str();
    match &input.shape {
        DispatchShape::Immediate | DispatchShape::Scroll(_) => {}
        DispatchShape::Click { selector } => {
            w.blank();
            w.open_block(&format!(
                "document.querySelectorAll({}).forEach((el){}{{",
                js_str(selector),
                style.arrow()
            ));
            w.open_block(&format!(
                "el.addEventListener(\"click\"{}(){}{{",
                style.sep(),
                style.arrow()
            ));
            w.stmt(&format!("{ident}.restart();"));
            w.close_block("});");
            w.close_block("});");
        }
        DispatchShape::Hover { selector } => {
            w.blank();
            w.open_block(&format!(
                "document.querySelectorAll({}).forEach((el){}{{",
                js_str(selector),
                style.arrow()
            ));
            w.open_block(&format!(
                "el.addEventListener(\"mouseenter\"{}(){}{{",
                style.sep(),
                style.arrow()
            ));
            w.stmt(&format!("{ident}.play();"));
            w.close_block("});");
            w.open_block(&format!(
                "el.addEventListener(\"mouseleave\"{}(){}{{",
                style.sep(),
                style.arrow()
            ));
            w.stmt(&format!("{ident}.reverse();"));
            w.close_block("});");
            w.close_block("});");
        }
    }
}

/// The whole script: imports, plugin registration, optional reduced-motion
/// guard, timeline construction, step calls, listener registration. Both the
/// full and minified artifacts come from here; only `style` differs.
pub(crate) fn render_script(input: &EmitInput, style: Style) -> String {
    let mut w = JsWriter::new(style);

    for line in import_stmts(&input.shape, style) {
        w.stmt(line);
    }
    if input.shape.needs_scroll_plugin() {
        w.blank();
        w.stmt("gsap.registerPlugin(ScrollTrigger);");
    }
    w.blank();

    let guarded = input.guard == GuardDescriptor::MediaQuerySkip;
    if guarded {
        w.comment("Respect the user's reduced-motion preference.");
        w.stmt(&format!(
            "const reduceMotion{}window.matchMedia(\"(prefers-reduced-motion: reduce)\").matches;",
            style.assign()
        ));
        w.blank();
        w.open_block(match style {
            Style::Pretty => "if (!reduceMotion) {",
            Style::Compact => "if(!reduceMotion){",
        });
    }

    write_timeline(&mut w, input);
    if !input.tweens.is_empty() {
        w.blank();
        for tween in &input.tweens {
            w.stmt(&tween_call(input.ident.as_str(), tween, style));
        }
    }
    write_listeners(&mut w, input);

    if guarded {
        w.close_block("}");
    }
    w.finish()
}
