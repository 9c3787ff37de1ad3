use crate::{
    ast::{
        common::OrderBy,
        expr::{Expression, Link},
    },
    render::{Render, Renderer},
};
use tracing::trace;

impl Render for Expression {
    fn render(&self, r: &mut Renderer) {
        for link in self.links() {
            link.render(r);
        }
        for order in self.order_by() {
            order.render(r);
        }
        trace!("Rendered {} statement(s) with {}", self.len(), r.dialect.name());
    }
}

impl Render for Link {
    fn render(&self, r: &mut Renderer) {
        if let Some(join) = self.join {
            r.out.push_str(r.dialect.join_token(join));
        }
        self.statement.render(r);
    }
}

impl Render for OrderBy {
    fn render(&self, r: &mut Renderer) {
        r.out.push_str(r.dialect.order_token(self.direction));
        r.out.push_str(&self.field);
    }
}
