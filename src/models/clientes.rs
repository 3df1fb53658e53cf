// src/models/clientes.rs

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

// --- ENUMS ---

// As seis entidades dependentes de um cliente. O despacho genérico do
// painel (modais, exclusão, registro de APIs) é fechado sobre este enum:
// não existe tag desconhecida em tempo de execução.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum TipoEntidade {
    Contrato,
    Unidade,
    Setor,
    Aprovador,
    Solicitante,
    OpcaoCq,
}

impl TipoEntidade {
    pub const TODOS: [TipoEntidade; 6] = [
        TipoEntidade::Contrato,
        TipoEntidade::Unidade,
        TipoEntidade::Setor,
        TipoEntidade::Aprovador,
        TipoEntidade::Solicitante,
        TipoEntidade::OpcaoCq,
    ];

    /// Esquema ordenado do formulário do modal deste tipo. O setor é o
    /// único com um campo de seleção (a unidade dona); as opções válidas
    /// são as unidades do cliente em edição.
    pub fn campos(self) -> &'static [CampoFormulario] {
        match self {
            TipoEntidade::Contrato => &[CampoFormulario {
                nome: "numero",
                rotulo: "Número do Contrato",
                obrigatorio: true,
                tipo: TipoCampo::Texto,
            }],
            TipoEntidade::Unidade => &[CampoFormulario {
                nome: "nome",
                rotulo: "Nome da Unidade",
                obrigatorio: true,
                tipo: TipoCampo::Texto,
            }],
            TipoEntidade::Setor => &[
                CampoFormulario {
                    nome: "nome",
                    rotulo: "Nome do Setor",
                    obrigatorio: true,
                    tipo: TipoCampo::Texto,
                },
                CampoFormulario {
                    nome: "unidade",
                    rotulo: "Unidade",
                    obrigatorio: true,
                    tipo: TipoCampo::Selecao,
                },
            ],
            TipoEntidade::Aprovador => &[CampoFormulario {
                nome: "nome",
                rotulo: "Nome do Aprovador",
                obrigatorio: true,
                tipo: TipoCampo::Texto,
            }],
            TipoEntidade::Solicitante => &[CampoFormulario {
                nome: "nome",
                rotulo: "Nome do Solicitante",
                obrigatorio: true,
                tipo: TipoCampo::Texto,
            }],
            TipoEntidade::OpcaoCq => &[CampoFormulario {
                nome: "nome",
                rotulo: "Nome da Opção",
                obrigatorio: true,
                tipo: TipoCampo::Texto,
            }],
        }
    }
}

impl fmt::Display for TipoEntidade {
    // Título usado nos cabeçalhos dos modais ("Novo Contrato", "Editar Setor").
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let titulo = match self {
            TipoEntidade::Contrato => "Contrato",
            TipoEntidade::Unidade => "Unidade",
            TipoEntidade::Setor => "Setor",
            TipoEntidade::Aprovador => "Aprovador",
            TipoEntidade::Solicitante => "Solicitante",
            TipoEntidade::OpcaoCq => "Opção Especial CQ",
        };
        f.write_str(titulo)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TipoCampo {
    Texto,
    Selecao,
}

// Um campo do formulário de entidade dependente (o "molde" do modal).
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CampoFormulario {
    pub nome: &'static str,
    pub rotulo: &'static str,
    pub obrigatorio: bool,
    pub tipo: TipoCampo,
}

// --- CLIENTE (A Entidade Principal) ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cliente {
    pub id: i64,
    pub nome: String,

    // HH por tipo de serviço. O backend pode omitir campos zerados;
    // `default` cobre a ausência (vale 0).
    #[serde(default)]
    pub hh_valor_fabricacao: Decimal,
    #[serde(default)]
    pub hh_valor_levantamento: Decimal,
    #[serde(default)]
    pub hh_valor_servico_pintura_revestimento: Decimal,
    #[serde(default)]
    pub hh_valor_montagem: Decimal,
    #[serde(default)]
    pub hh_valor_inspecao: Decimal,
}

// --- FORMULÁRIO (O Rascunho em edição) ---

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct FormularioCliente {
    #[validate(length(min = 1, message = "O nome do cliente é obrigatório"))]
    pub nome: String,

    #[serde(default)]
    pub hh_valor_fabricacao: Decimal,
    #[serde(default)]
    pub hh_valor_levantamento: Decimal,
    #[serde(default)]
    pub hh_valor_servico_pintura_revestimento: Decimal,
    #[serde(default)]
    pub hh_valor_montagem: Decimal,
    #[serde(default)]
    pub hh_valor_inspecao: Decimal,
}

impl FormularioCliente {
    /// Copia os campos editáveis de um cliente existente para o rascunho.
    pub fn de_cliente(cliente: &Cliente) -> Self {
        Self {
            nome: cliente.nome.clone(),
            hh_valor_fabricacao: cliente.hh_valor_fabricacao,
            hh_valor_levantamento: cliente.hh_valor_levantamento,
            hh_valor_servico_pintura_revestimento: cliente
                .hh_valor_servico_pintura_revestimento,
            hh_valor_montagem: cliente.hh_valor_montagem,
            hh_valor_inspecao: cliente.hh_valor_inspecao,
        }
    }
}

// --- ENTIDADES DEPENDENTES ---

fn ativo_padrao() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contrato {
    pub id: i64,
    pub cliente: i64,
    pub numero: String,
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default = "ativo_padrao")]
    pub ativo: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unidade {
    pub id: i64,
    pub cliente: i64,
    pub nome: String,
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default = "ativo_padrao")]
    pub ativo: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Setor {
    pub id: i64,
    pub cliente: i64,
    // A unidade dona. Obrigatória: um setor nunca existe solto.
    pub unidade: i64,
    pub nome: String,
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default = "ativo_padrao")]
    pub ativo: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Aprovador {
    pub id: i64,
    pub cliente: i64,
    pub nome: String,
    #[serde(default)]
    pub cargo: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default = "ativo_padrao")]
    pub ativo: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solicitante {
    pub id: i64,
    pub cliente: i64,
    pub nome: String,
    #[serde(default)]
    pub cargo: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default = "ativo_padrao")]
    pub ativo: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpcaoEspecCq {
    pub id: i64,
    pub cliente: i64,
    pub nome: String,
    #[serde(default)]
    pub descricao: Option<String>,
    #[serde(default = "ativo_padrao")]
    pub ativo: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

// --- SNAPSHOT DO AGREGADO ---

// As seis coleções de um único cliente, tratadas como unidade atômica:
// ou o snapshot inteiro é instalado, ou nada dele é.
#[derive(Debug, Clone, Default)]
pub struct ColecoesDependentes {
    pub contratos: Vec<Contrato>,
    pub unidades: Vec<Unidade>,
    pub setores: Vec<Setor>,
    pub aprovadores: Vec<Aprovador>,
    pub solicitantes: Vec<Solicitante>,
    pub opcoes_espec_cq: Vec<OpcaoEspecCq>,
}
