use super::*;

fn preenchido() -> NovaMovimentacaoForm {
    NovaMovimentacaoForm {
        descricao: "Anuidade - João Silva".to_owned(),
        valor: "150.00".to_owned(),
        tipo: Tipo::Entrada,
        categoria: Categoria::Anuidades,
        forma_pagamento: FormaPagamento::Pix,
        data: "2024-03-10".to_owned(),
    }
}

// =============================================================
// Happy path
// =============================================================

#[test]
fn formulario_valido_gera_pedido() {
    let pedido = preenchido().validar().expect("formulário válido");
    assert_eq!(pedido.descricao, "Anuidade - João Silva");
    assert_eq!(pedido.valor, 150.0);
    assert_eq!(pedido.data, "2024-03-10");
}

#[test]
fn descricao_e_aparada() {
    let mut form = preenchido();
    form.descricao = "  Compra de alvos  ".to_owned();
    let pedido = form.validar().expect("formulário válido");
    assert_eq!(pedido.descricao, "Compra de alvos");
}

// =============================================================
// Required fields
// =============================================================

#[test]
fn descricao_obrigatoria() {
    let mut form = preenchido();
    form.descricao = "   ".to_owned();
    assert_eq!(form.validar(), Err(ValidationError::CampoObrigatorio("descrição")));
}

#[test]
fn data_obrigatoria() {
    let mut form = preenchido();
    form.data = String::new();
    assert_eq!(form.validar(), Err(ValidationError::CampoObrigatorio("data")));
}

#[test]
fn valor_obrigatorio() {
    let mut form = preenchido();
    form.valor = String::new();
    assert_eq!(form.validar(), Err(ValidationError::CampoObrigatorio("valor")));
}

// =============================================================
// Numeric range
// =============================================================

#[test]
fn valor_nao_numerico_e_rejeitado() {
    let mut form = preenchido();
    form.valor = "dez reais".to_owned();
    assert_eq!(form.validar(), Err(ValidationError::ValorInvalido));
}

#[test]
fn valor_abaixo_do_minimo() {
    let mut form = preenchido();
    form.valor = "4.99".to_owned();
    assert_eq!(form.validar(), Err(ValidationError::ValorForaDoIntervalo));
}

#[test]
fn valor_acima_do_maximo() {
    let mut form = preenchido();
    form.valor = "10000.01".to_owned();
    assert_eq!(form.validar(), Err(ValidationError::ValorForaDoIntervalo));
}

#[test]
fn limites_sao_inclusivos() {
    let mut form = preenchido();
    form.valor = "5".to_owned();
    assert!(form.validar().is_ok());
    form.valor = "10000".to_owned();
    assert!(form.validar().is_ok());
}

#[test]
fn preview_sem_valor_e_none() {
    let mut form = preenchido();
    form.valor = "abc".to_owned();
    assert_eq!(form.valor_numerico(), None);
}

// =============================================================
// Error messages
// =============================================================

#[test]
fn mensagens_sao_legiveis() {
    assert_eq!(
        ValidationError::CampoObrigatorio("descrição").to_string(),
        "preencha o campo descrição"
    );
    assert_eq!(
        ValidationError::ValorForaDoIntervalo.to_string(),
        "o valor deve estar entre R$ 5,00 e R$ 10.000,00"
    );
}
