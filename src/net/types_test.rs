use super::*;

// =============================================================
// Wire names
// =============================================================

#[test]
fn tipo_parse_wire_values() {
    assert_eq!(Tipo::parse("entrada"), Some(Tipo::Entrada));
    assert_eq!(Tipo::parse("saida"), Some(Tipo::Saida));
    assert_eq!(Tipo::parse("todos"), None);
}

#[test]
fn categoria_parse_accented_wire_value() {
    assert_eq!(Categoria::parse("acessórios"), Some(Categoria::Acessorios));
    assert_eq!(Categoria::parse("acessorios"), None);
    assert_eq!(Categoria::parse("todos"), None);
}

#[test]
fn forma_pagamento_parse_wire_values() {
    assert_eq!(FormaPagamento::parse("pix"), Some(FormaPagamento::Pix));
    assert_eq!(FormaPagamento::parse("cartao"), Some(FormaPagamento::Cartao));
    assert_eq!(FormaPagamento::parse("boleto"), None);
}

// =============================================================
// Boundary parsing
// =============================================================

#[test]
fn movimentacao_parses_backend_record() {
    let raw = r#"{
        "id": 7,
        "descricao": "Anuidade - João Silva",
        "valor": 150.0,
        "tipo": "entrada",
        "categoria": "acessórios",
        "forma_pagamento": "cartao",
        "data": "2024-03-10",
        "responsavel": "Maria"
    }"#;
    let mov: Movimentacao = serde_json::from_str(raw).expect("registro válido");
    assert_eq!(mov.tipo, Tipo::Entrada);
    assert_eq!(mov.categoria, Categoria::Acessorios);
    assert_eq!(mov.forma_pagamento, FormaPagamento::Cartao);
}

#[test]
fn movimentacao_rejects_unknown_tipo() {
    let raw = r#"{
        "id": 1,
        "descricao": "x",
        "valor": 10.0,
        "tipo": "transferencia",
        "categoria": "provas",
        "forma_pagamento": "pix",
        "data": "2024-01-01",
        "responsavel": "y"
    }"#;
    assert!(serde_json::from_str::<Movimentacao>(raw).is_err());
}

#[test]
fn login_response_parses() {
    let raw = r#"{"token": "T", "user": {"id": 1, "nome": "Ana", "email": "a@b.com"}}"#;
    let resp: LoginResponse = serde_json::from_str(raw).expect("payload válido");
    assert_eq!(resp.token, "T");
    assert_eq!(resp.user.nome, "Ana");
}

#[test]
fn nova_movimentacao_serializes_wire_names() {
    let pedido = NovaMovimentacaoRequest {
        descricao: "Munição".to_owned(),
        valor: 99.9,
        tipo: Tipo::Saida,
        categoria: Categoria::Acessorios,
        forma_pagamento: FormaPagamento::Dinheiro,
        data: "2024-05-01".to_owned(),
    };
    let json = serde_json::to_value(&pedido).expect("serializa");
    assert_eq!(json["tipo"], "saida");
    assert_eq!(json["categoria"], "acessórios");
    assert_eq!(json["forma_pagamento"], "dinheiro");
}
