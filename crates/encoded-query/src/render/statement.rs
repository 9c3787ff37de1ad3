use crate::{
    ast::{operand::Operand, operator::Arity, statement::Statement},
    render::{Render, Renderer},
};

impl Render for Statement {
    fn render(&self, r: &mut Renderer) {
        r.out.push_str(self.field());
        r.out.push_str(r.dialect.operator_token(self.operator()));

        let separator = match self.operator().signature().arity {
            Arity::Nullary | Arity::Unary => "",
            Arity::Binary => r.dialect.range_separator(),
            Arity::Variadic => r.dialect.list_separator(),
        };
        for (i, operand) in self.operands().iter().enumerate() {
            if i > 0 {
                r.out.push_str(separator);
            }
            operand.render(r);
        }
    }
}

impl Render for Operand {
    fn render(&self, r: &mut Renderer) {
        match self {
            Operand::String(s) => r.out.push_str(s),
            Operand::Int(i) => r.out.push_str(&i.to_string()),
            Operand::Timestamp(ts) => {
                let literal = r.dialect.format_timestamp(ts);
                r.out.push_str(&literal);
            }
        }
    }
}
