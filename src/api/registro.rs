// src/api/registro.rs

use std::sync::Arc;

use crate::api::RecursoRemoto;
use crate::models::clientes::TipoEntidade;

// Mapeia cada tipo dependente à sua capacidade remota. É a versão fechada
// do antigo mapa tag -> API: como `TipoEntidade` é um enum, não existe o
// caso "tipo desconhecido" — o despacho é total.
#[derive(Clone)]
pub struct RegistroApis {
    pub contratos: Arc<dyn RecursoRemoto>,
    pub unidades: Arc<dyn RecursoRemoto>,
    pub setores: Arc<dyn RecursoRemoto>,
    pub aprovadores: Arc<dyn RecursoRemoto>,
    pub solicitantes: Arc<dyn RecursoRemoto>,
    pub opcoes_espec_cq: Arc<dyn RecursoRemoto>,
}

impl RegistroApis {
    pub fn recurso(&self, tipo: TipoEntidade) -> &Arc<dyn RecursoRemoto> {
        match tipo {
            TipoEntidade::Contrato => &self.contratos,
            TipoEntidade::Unidade => &self.unidades,
            TipoEntidade::Setor => &self.setores,
            TipoEntidade::Aprovador => &self.aprovadores,
            TipoEntidade::Solicitante => &self.solicitantes,
            TipoEntidade::OpcaoCq => &self.opcoes_espec_cq,
        }
    }
}
