use tera::{Context, Tera};

const MAIN_TEMPLATE: &str = include_str!("../templates/main.html");
const FLOW_TEST_TEMPLATE: &str = include_str!("../templates/flow_test.html");

/// 页面渲染器
/// 模板编译进二进制，启动时加载一次
pub struct PageRenderer {
    tera: Tera,
}

impl PageRenderer {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("main.html", MAIN_TEMPLATE),
            ("flow_test.html", FLOW_TEST_TEMPLATE),
        ])?;
        tera.autoescape_on(vec![".html"]);

        Ok(Self { tera })
    }

    /// 渲染模板
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String, tera::Error> {
        self.tera.render(template_name, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_main_page() {
        let renderer = PageRenderer::new().unwrap();
        let html = renderer.render("main.html", &Context::new()).unwrap();
        assert!(html.contains("/flowtest"));
    }

    #[test]
    fn test_render_escapes_model_values() {
        let renderer = PageRenderer::new().unwrap();

        let mut context = Context::new();
        context.insert("fixed_extensions", &Vec::<serde_json::Value>::new());
        context.insert(
            "label_extensions",
            &vec![serde_json::json!({"name": "<b>pdf</b>"})],
        );
        context.insert("label_extension_count", &1);
        context.insert("label_limit", &200);
        context.insert("server_data", "{}");

        let html = renderer.render("flow_test.html", &context).unwrap();
        assert!(html.contains("&lt;b&gt;pdf&lt;&#x2F;b&gt;"));
        assert!(html.contains(r#"id="extensionCount">1<"#));
        assert!(html.contains(r#"id="extensionLimit">200<"#));
    }
}
